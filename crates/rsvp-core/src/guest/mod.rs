//! Guest name domain module.
//!
//! # Module Structure
//!
//! - `validator`: acceptance rules for free-text full names (`NameValidator`)
//! - `format`: display formatting and the comparison key used for duplicates

mod format;
mod validator;

pub use format::{contains_name, format_name, normalize_key};
pub use validator::{MAX_NAME_CHARS, MIN_NAME_CHARS, NameValidator, RejectReason, Validation};
