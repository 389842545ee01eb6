pub mod password;
pub mod validate;

pub use validate::{require_id, require_text};
