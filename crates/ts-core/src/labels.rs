//! Slider label formatting.

use crate::controls::SLIDER_MAX;

/// Share of the text to keep for a given compression ratio.
pub fn keep_percent(ratio: u8) -> u8 {
    SLIDER_MAX - ratio.min(SLIDER_MAX)
}

pub fn ratio_label(ratio: u8) -> String {
    format!("Keep {}%", keep_percent(ratio))
}

/// Threshold slider value (hundredths) as a two-decimal fraction.
pub fn threshold_value(threshold: u8) -> String {
    format!("{:.2}", f64::from(threshold) / 100.0)
}

pub fn threshold_label(threshold: u8) -> String {
    format!("Similarity threshold {}", threshold_value(threshold))
}
