//! Sequenced request dispatch.
//!
//! Every trigger takes the next sequence number before it sends. A response
//! is applied only while its number is still the latest issued, so a slow
//! older request can never overwrite the result of a newer one.

use crate::surface::Surface;
use crate::view_model::SharedView;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};
use ts_client::SimplifyTransport;

/// What happened to a single trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Response applied to the view.
    Applied { seq: u64 },
    /// Response arrived after a newer request was issued and was dropped.
    Stale { seq: u64, latest: u64 },
    /// Request failed; the user was notified and the view left untouched.
    Failed { seq: u64, message: String },
}

impl TriggerOutcome {
    pub fn seq(&self) -> u64 {
        match self {
            Self::Applied { seq } | Self::Stale { seq, .. } | Self::Failed { seq, .. } => *seq,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

pub struct RequestCoordinator {
    transport: Arc<dyn SimplifyTransport>,
    surface: Arc<dyn Surface>,
    view: SharedView,
    sequence: AtomicU64,
}

impl RequestCoordinator {
    pub fn new(transport: Arc<dyn SimplifyTransport>, surface: Arc<dyn Surface>, view: SharedView) -> Self {
        Self { transport, surface, view, sequence: AtomicU64::new(0) }
    }

    /// Sequence number of the most recently issued request, 0 before the first.
    pub fn latest_sequence(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    /// Build a request from the current view, send it, and apply the result.
    pub async fn trigger(&self) -> TriggerOutcome {
        // Numbering happens under the view lock so sequence order matches
        // the order in which requests observed the view.
        let (seq, request) = {
            let view = self.view.lock();
            let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
            (seq, view.request())
        };
        debug!(
            seq,
            transport = self.transport.name(),
            chars = request.text.chars().count(),
            compress_ratio = request.compress_ratio,
            "dispatching simplify request"
        );

        match self.transport.simplify(&request).await {
            Ok(response) => {
                let mut view = self.view.lock();
                let latest = self.sequence.load(Ordering::SeqCst);
                if seq != latest {
                    warn!(seq, latest, "discarding stale simplify response");
                    return TriggerOutcome::Stale { seq, latest };
                }
                view.apply_response(&response);
                info!(
                    seq,
                    orig_len = response.orig_len,
                    new_len = response.new_len,
                    reduction = view.stats.reduction,
                    removed = response.removed.len(),
                    "applied simplify response"
                );
                self.surface.render(&view);
                TriggerOutcome::Applied { seq }
            }
            Err(err) => {
                warn!(seq, error = %err, "simplify request failed");
                let message = err.notification();
                self.surface.alert(&message);
                TriggerOutcome::Failed { seq, message }
            }
        }
    }
}
