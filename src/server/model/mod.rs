//! Domain models and operation parameter types.
//!
//! Domain models are built from entity models at the repository boundary and
//! converted to DTOs at the controller boundary. Parameter types carry
//! validated input from the service layer into the data layer.

pub mod article;
pub mod comment;
pub mod suggestion;
pub mod user;
