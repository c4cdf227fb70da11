pub mod error;
pub mod member;
pub mod memory;
pub mod postgres;
pub mod store;

pub use common::MemberId;
pub use error::{MemberStoreError, Result};
pub use member::{Member, MemberUpdate};
pub use memory::InMemoryMemberRepository;
pub use postgres::PostgresMemberRepository;
pub use store::{MemberRepository, MemberRepositoryExt};
