//! Core library for buttonkit.
//!
//! Holds everything the CLI needs that isn't CSS text itself: the
//! configuration schema and lookup chain, the button palette (config in,
//! tokens + derived colors out), and the typed style resolver.

pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod palette;
pub mod style;

pub use config::{Config, ConfigLoadResult};
pub use error::{Error, Result};
pub use palette::ButtonPalette;
pub use style::{ButtonState, Intent, Interaction, Size, StyleRecord, resolve_button_style};
