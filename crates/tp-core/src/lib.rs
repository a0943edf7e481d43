//! Shared building blocks for tokpack: codec configuration, the marker
//! constant and the error taxonomy.

pub mod config;
pub mod error;

pub use config::{CodecConfig, DEFAULT_MARKER};
pub use error::{DecodingError, Result, TpError};
