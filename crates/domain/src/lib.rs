//! Domain layer for the membership service.
//!
//! This crate provides the business rules that sit between the HTTP
//! boundary and the member repository:
//! - Field validation for create and update payloads
//! - ID assignment for new members
//! - Mapping of persistence outcomes to response envelopes and errors

pub mod error;
pub mod member;
pub mod response;

pub use error::ServiceError;
pub use member::{CreateMember, MemberService, ServiceResult};
pub use response::{ErrorMessage, Response, SuccessMessage};
