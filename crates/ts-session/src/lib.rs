//! Request coordination and view state for the text simplifier.
//!
//! Control changes and input edits flow into a [`ViewModel`]; the
//! [`RequestCoordinator`] turns the current view into a request, sends it,
//! and applies the newest response. Presentation happens behind the
//! [`Surface`] trait.

pub mod coordinator;
pub mod debounce;
pub mod session;
pub mod surface;
pub mod view_model;

pub use coordinator::{RequestCoordinator, TriggerOutcome};
pub use debounce::Debouncer;
pub use session::SimplifierSession;
pub use surface::Surface;
pub use view_model::{RemovedEntry, SharedView, ViewModel, PLACEHOLDER};
