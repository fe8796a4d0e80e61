pub mod entity;
pub mod error;
pub mod port;

pub use entity::*;
pub use error::DomainError;
pub use port::*;
