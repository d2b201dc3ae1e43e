use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Presentation collaborator: non-blocking notices and the haptic
/// acknowledgement on the scanning device. Failures are never allowed
/// to interrupt scanning.
#[async_trait]
pub trait NotifierPort: Send + Sync {
    async fn notify(&self, kind: NoticeKind, message: &str) -> Result<()>;

    async fn vibrate(&self, duration_ms: u64) -> Result<()>;
}
