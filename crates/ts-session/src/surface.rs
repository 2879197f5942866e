use crate::view_model::ViewModel;

/// Presentation adapter. Implementations draw the view model and show
/// notifications; they never hold on to the view model between calls.
pub trait Surface: Send + Sync {
    /// Repaint after any view-model change.
    fn render(&self, view: &ViewModel);

    /// Blocking user notification.
    fn alert(&self, message: &str);
}
