pub mod common;
pub mod manifest;

pub use crate::domain::DomainError;
pub use manifest::{CommandSpec, Manifest, Operation};
