//! View model and the render functions that mutate it.

use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use ts_core::labels::{ratio_label, threshold_label};
use ts_core::{Controls, SimplifyRequest, SimplifyResponse, Stats};

/// Text of the single entry shown when nothing was removed.
pub const PLACEHOLDER: &str = "(none)";

pub type SharedView = Arc<Mutex<ViewModel>>;

/// One line of the removed-items list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum RemovedEntry {
    Placeholder,
    Item(String),
}

impl RemovedEntry {
    pub fn text(&self) -> &str {
        match self {
            Self::Placeholder => PLACEHOLDER,
            Self::Item(s) => s,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// Everything a front end needs to draw the simplifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub input: String,
    pub output: String,
    pub stats: Stats,
    pub removed: Vec<RemovedEntry>,
    pub controls: Controls,
    pub ratio_label: String,
    pub threshold_label: String,
}

impl ViewModel {
    pub fn new(controls: Controls) -> Self {
        let mut view = Self {
            input: String::new(),
            output: String::new(),
            stats: Stats::default(),
            removed: vec![RemovedEntry::Placeholder],
            controls,
            ratio_label: String::new(),
            threshold_label: String::new(),
        };
        view.update_labels();
        view
    }

    pub fn shared(self) -> SharedView {
        Arc::new(Mutex::new(self))
    }

    /// Request for the current input and controls.
    pub fn request(&self) -> SimplifyRequest {
        self.controls.to_request(self.input.as_str())
    }

    pub fn update_labels(&mut self) {
        self.ratio_label = ratio_label(self.controls.ratio);
        self.threshold_label = threshold_label(self.controls.threshold);
    }

    pub fn refresh_stats(&mut self, orig_len: u64, new_len: u64) {
        self.stats = Stats::new(orig_len, new_len);
    }

    /// Replace the removed list; an empty list shows the placeholder.
    pub fn update_removed_list(&mut self, removed: &[String]) {
        if removed.is_empty() {
            self.removed = vec![RemovedEntry::Placeholder];
            return;
        }
        self.removed = removed.iter().cloned().map(RemovedEntry::Item).collect();
    }

    /// Fan a successful response out to the output, stats and removed list.
    pub fn apply_response(&mut self, response: &SimplifyResponse) {
        self.output = response.text.clone();
        self.refresh_stats(response.orig_len, response.new_len);
        self.update_removed_list(&response.removed);
    }

    /// Reset input, output, stats and the removed list. Controls are kept.
    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.stats = Stats::default();
        self.removed = vec![RemovedEntry::Placeholder];
    }

    /// Removed entries that are real items, in display order.
    pub fn removed_items(&self) -> impl Iterator<Item = &str> {
        self.removed.iter().filter(|e| !e.is_placeholder()).map(RemovedEntry::text)
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new(Controls::default())
    }
}
