//! Event handlers for a single simplifier view.

use crate::coordinator::{RequestCoordinator, TriggerOutcome};
use crate::debounce::Debouncer;
use crate::surface::Surface;
use crate::view_model::{SharedView, ViewModel};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};
use ts_client::SimplifyTransport;
use ts_core::{Controls, Preset, Result, SimplifierConfig, SimplifierError};

/// Owns the view model and wires user events to it.
///
/// Input edits are debounced into automatic triggers; everything else
/// updates the view and repaints immediately.
pub struct SimplifierSession {
    view: SharedView,
    surface: Arc<dyn Surface>,
    coordinator: Arc<RequestCoordinator>,
    debouncer: Debouncer,
    presets: Vec<Preset>,
}

impl SimplifierSession {
    /// Build a session and paint its initial state.
    pub fn new(
        config: &SimplifierConfig,
        transport: Arc<dyn SimplifyTransport>,
        surface: Arc<dyn Surface>,
    ) -> Self {
        let view = ViewModel::new(Controls::from_defaults(&config.defaults)).shared();
        let coordinator = Arc::new(RequestCoordinator::new(
            transport,
            Arc::clone(&surface),
            Arc::clone(&view),
        ));
        let session = Self {
            view,
            surface,
            coordinator,
            debouncer: Debouncer::new(config.debounce.delay()),
            presets: config.presets.clone(),
        };
        session.update(|_| {});
        session
    }

    pub fn snapshot(&self) -> ViewModel {
        self.view.lock().clone()
    }

    pub fn coordinator(&self) -> &Arc<RequestCoordinator> {
        &self.coordinator
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Whether an automatic trigger is waiting for input to go quiet.
    pub fn has_pending_trigger(&self) -> bool {
        self.debouncer.is_pending()
    }

    fn update(&self, f: impl FnOnce(&mut ViewModel)) {
        let mut view = self.view.lock();
        f(&mut *view);
        self.surface.render(&view);
    }

    /// Replace the input text without scheduling a request.
    pub fn set_input(&self, text: impl Into<String>) {
        let text = text.into();
        self.update(|v| v.input = text);
    }

    /// Input edit: replace the text and restart the quiet-period timer.
    pub fn on_input(&self, text: impl Into<String>) {
        self.set_input(text);
        let coordinator = Arc::clone(&self.coordinator);
        self.debouncer.schedule(move || async move {
            coordinator.trigger().await;
        });
    }

    /// Manual trigger.
    pub async fn simplify_now(&self) -> TriggerOutcome {
        self.coordinator.trigger().await
    }

    pub fn set_ratio(&self, ratio: u8) {
        self.update(|v| {
            v.controls.set_ratio(ratio);
            v.update_labels();
        });
    }

    pub fn set_threshold(&self, threshold: u8) {
        self.update(|v| {
            v.controls.set_threshold(threshold);
            v.update_labels();
        });
    }

    pub fn set_clean_fillers(&self, on: bool) {
        self.update(|v| v.controls.clean_fillers = on);
    }

    pub fn set_dedupe(&self, on: bool) {
        self.update(|v| v.controls.dedupe = on);
    }

    pub fn set_preserve_order(&self, on: bool) {
        self.update(|v| v.controls.preserve_order = on);
    }

    /// Activate preset `index`. Returns false if there is no such preset.
    pub fn select_preset(&self, index: usize) -> bool {
        let Some(preset) = self.presets.get(index) else {
            debug!(index, presets = self.presets.len(), "ignoring unknown preset");
            return false;
        };
        self.update(|v| {
            v.controls.apply_preset(index, preset);
            v.update_labels();
        });
        true
    }

    /// Reset input, output, stats and removed list.
    pub fn clear(&self) {
        self.update(ViewModel::clear);
    }

    /// Load a whole file as the input and trigger immediately.
    ///
    /// Invalid UTF-8 sequences decode to U+FFFD. `None` means nothing was
    /// selected. Both a missing selection and a read failure are reported to
    /// the user and send no request.
    pub async fn import_file(&self, path: Option<&Path>) -> Result<TriggerOutcome> {
        let Some(path) = path else {
            return Err(self.report(SimplifierError::NoFileSelected));
        };
        let text = match tokio::fs::read(path).await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(source) => {
                return Err(self.report(SimplifierError::FileRead {
                    path: path.display().to_string(),
                    source,
                }));
            }
        };
        info!(path = %path.display(), chars = text.chars().count(), "imported input file");
        self.set_input(text);
        Ok(self.simplify_now().await)
    }

    fn report(&self, err: SimplifierError) -> SimplifierError {
        warn!(error = %err, "input import failed");
        self.surface.alert(&err.notification());
        err
    }
}
