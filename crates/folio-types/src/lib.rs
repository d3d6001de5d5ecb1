//! folio-types: foundation types shared by every folio crate.
//!
//! Keeps the leaf crates dependency-light: errors, platform-agnostic key
//! events, and the color type the theme/renderer layers speak.

pub mod color;
pub mod error;
pub mod input;

pub use color::Color;
pub use error::{FolioError, Result};
pub use input::KeyEvent;
