//! Core building blocks shared by the scanner and the diagram emitter
//!
//! Errors, logging setup, text utilities and the source reader seam.

mod error;
pub mod logging;
mod reader;
mod text;

pub use error::*;
pub use logging::*;
pub use reader::*;
pub use text::*;
