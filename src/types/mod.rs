//! Core types for runshot.

pub mod generation;
pub mod image;
pub mod message;
pub mod usage;

pub use self::generation::*;
pub use self::image::{ImageKind, UploadedImage};
pub use self::message::*;
pub use self::usage::*;
