//! Design Domain Module
//!
//! Types, errors, and the editing session for AI-assisted design
//! generation.

pub mod error;
pub mod session;
pub mod types;

pub use error::{GenerationError, Result};
pub use session::{DesignSession, IMAGE_FAILURE_MESSAGE, TEXT_FAILURE_MESSAGE};
pub use types::{
    ConfigPatch, DesignCategory, DesignConfig, DesignState, FontPairing, GeneratedContent,
    GeneratedImage,
};
