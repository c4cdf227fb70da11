//! Member commands and service.

mod commands;
mod service;

pub use commands::CreateMember;
pub use service::{MemberService, ServiceResult};
