pub mod bits;
pub mod charset;
pub mod errors;
pub mod hex;
pub mod int;
pub mod radix;
pub mod streaming;

// Re-export error types for public API
pub use errors::{ConvertError, TextFormat};
