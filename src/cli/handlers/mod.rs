pub mod binary;
pub mod bits;
pub mod config;
pub mod hex;
pub mod int;
pub mod lines;
pub mod size;
pub mod span;
pub mod text;
