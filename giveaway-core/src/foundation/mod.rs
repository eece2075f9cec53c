//! Foundation layer: shared primitives grouped for the layered architecture.

pub mod amount;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;

pub use amount::*;
pub use constants::*;
pub use error::*;
pub use types::*;
