//! Request payload validation
//!
//! Write payloads are checked for field presence and type before any
//! catalog operation runs. A failure here is always a caller error.

mod errors;
mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use validator::SongPayloadValidator;
