pub mod members;
pub mod system;
