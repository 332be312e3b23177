//! Unit conversions that sit beside the byte codecs.
//!
//! These work on plain integers and are organised separately from the core
//! encoding/decoding functionality.

pub mod memory;
pub mod timespan;

// Re-export main types and functions for convenience
pub use memory::{MemoryUnit, bytes_to_fit_memory_size, bytes_to_memory_size, memory_size_to_bytes};
pub use timespan::{SpanUnit, millis_to_fit_time_span, millis_to_time_span, time_span_to_millis};
