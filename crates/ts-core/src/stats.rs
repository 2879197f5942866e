//! Length statistics shown next to the simplified output.

use serde::{Deserialize, Serialize};

/// Original length, simplified length, and the derived reduction percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub orig_len: u64,
    pub new_len: u64,
    pub reduction: i64,
}

impl Stats {
    pub fn new(orig_len: u64, new_len: u64) -> Self {
        Self { orig_len, new_len, reduction: reduction_percent(orig_len, new_len) }
    }
}

/// `round((orig - new) / orig * 100)`, or 0 when `orig` is 0.
///
/// Halves round towards positive infinity, so a growth of 2.5% reports -2.
/// The result is negative whenever the output is longer than the input.
pub fn reduction_percent(orig_len: u64, new_len: u64) -> i64 {
    if orig_len == 0 {
        return 0;
    }
    let pct = (orig_len as f64 - new_len as f64) * 100.0 / orig_len as f64;
    (pct + 0.5).floor() as i64
}
