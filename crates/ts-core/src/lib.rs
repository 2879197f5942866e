//! Core types for the text simplifier client: wire format, controls,
//! configuration, error taxonomy, and the display derivations shared by
//! every front end.

pub mod config;
pub mod controls;
pub mod error;
pub mod labels;
pub mod stats;
pub mod types;

pub use config::SimplifierConfig;
pub use controls::{default_presets, ControlDefaults, Controls, Preset, SLIDER_MAX};
pub use error::{Result, SimplifierError};
pub use stats::{reduction_percent, Stats};
pub use types::{SimplifyRequest, SimplifyResponse};
