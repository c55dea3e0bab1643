pub mod error;
pub mod handlers;
pub mod pipeline;
pub mod types;
pub mod validate;

pub use error::ApiError;
pub use handlers::*;
pub use pipeline::*;
pub use types::*;
pub use validate::{parse_completion, ValidationError};
