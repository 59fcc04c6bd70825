// src/core/mod.rs

pub mod filter;
pub mod sanitize;
pub mod size;
pub mod transcript;

pub use filter::{FilterRange, filter_options};
pub use size::format_size;
pub use transcript::{LogLine, Transcript};
