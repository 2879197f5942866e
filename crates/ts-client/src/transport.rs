use async_trait::async_trait;
use ts_core::{Result, SimplifyRequest, SimplifyResponse};

/// Something that can turn a [`SimplifyRequest`] into a [`SimplifyResponse`].
///
/// Implementations report non-success statuses as
/// [`ts_core::SimplifierError::Server`] carrying the response body, and
/// connection problems as [`ts_core::SimplifierError::Transport`].
#[async_trait]
pub trait SimplifyTransport: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    async fn simplify(&self, request: &SimplifyRequest) -> Result<SimplifyResponse>;
}
