//! Core type definitions for mdextract

mod error;
mod heading;
mod link;
mod mode;

pub use error::*;
pub use heading::*;
pub use link::*;
pub use mode::*;
