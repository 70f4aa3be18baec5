//! Narrow interfaces to the UI framework
//!
//! Rendering, styling and table mechanics belong to the host UI; the
//! console only needs these three seams.

use async_trait::async_trait;

/// Operator-visible notices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// In-progress indicator, visible until dismissed
    Loading(String),
    Success(String),
    Failure(String),
}

/// Toast/notification surface
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);

    /// Dismiss the indicator shown by the last [`Notice::Loading`]
    fn dismiss(&self);
}

/// Blocking OK/Cancel confirmation dialog
#[async_trait]
pub trait ConfirmGate: Send + Sync {
    async fn confirm(&self, title: &str, body: &str) -> bool;
}

/// Handle to the data table component
pub trait TableHandle: Send + Sync {
    /// Refetch the current page
    fn reload(&self);

    /// Refetch and reset paging and selection
    fn reload_and_reset(&self);
}
