//! Contract enumerations and validation errors.

mod contract;
mod error;

pub use contract::{OptionStyle, OptionType};
pub use error::ValidationError;
