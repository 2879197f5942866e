//! User-adjustable options and preset buttons.

use crate::types::SimplifyRequest;
use serde::{Deserialize, Serialize};

/// Upper bound of both sliders.
pub const SLIDER_MAX: u8 = 100;

/// Initial control values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlDefaults {
    pub ratio: u8,
    /// Duplicate threshold in hundredths.
    pub threshold: u8,
    pub clean_fillers: bool,
    pub dedupe: bool,
    pub preserve_order: bool,
}

impl Default for ControlDefaults {
    fn default() -> Self {
        Self {
            ratio: 40,
            threshold: 80,
            clean_fillers: true,
            dedupe: true,
            preserve_order: true,
        }
    }
}

/// A one-click ratio setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub label: String,
    pub ratio: u8,
}

impl Preset {
    pub fn new(label: impl Into<String>, ratio: u8) -> Self {
        Self { label: label.into(), ratio }
    }
}

pub fn default_presets() -> Vec<Preset> {
    vec![
        Preset::new("Light", 20),
        Preset::new("Balanced", 40),
        Preset::new("Aggressive", 60),
        Preset::new("Extreme", 80),
    ]
}

/// Current state of the sliders, checkboxes and preset buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub ratio: u8,
    pub threshold: u8,
    pub clean_fillers: bool,
    pub dedupe: bool,
    pub preserve_order: bool,
    pub active_preset: Option<usize>,
}

impl Controls {
    pub fn from_defaults(defaults: &ControlDefaults) -> Self {
        Self {
            ratio: defaults.ratio.min(SLIDER_MAX),
            threshold: defaults.threshold.min(SLIDER_MAX),
            clean_fillers: defaults.clean_fillers,
            dedupe: defaults.dedupe,
            preserve_order: defaults.preserve_order,
            active_preset: None,
        }
    }

    /// Move the ratio slider; values past the end stop at the end.
    pub fn set_ratio(&mut self, ratio: u8) {
        self.ratio = ratio.min(SLIDER_MAX);
    }

    pub fn set_threshold(&mut self, threshold: u8) {
        self.threshold = threshold.min(SLIDER_MAX);
    }

    /// Mark `index` as the only active preset and take over its ratio.
    pub fn apply_preset(&mut self, index: usize, preset: &Preset) {
        self.active_preset = Some(index);
        self.set_ratio(preset.ratio);
    }

    /// Duplicate threshold as sent on the wire.
    pub fn dup_threshold(&self) -> f64 {
        f64::from(self.threshold) / 100.0
    }

    pub fn to_request(&self, text: impl Into<String>) -> SimplifyRequest {
        SimplifyRequest {
            text: text.into(),
            compress_ratio: self.ratio,
            dup_threshold: self.dup_threshold(),
            dedupe: self.dedupe,
            preserve_order: self.preserve_order,
            clean_fillers: self.clean_fillers,
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::from_defaults(&ControlDefaults::default())
    }
}
