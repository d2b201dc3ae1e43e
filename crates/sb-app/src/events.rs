use async_trait::async_trait;
use tokio::sync::mpsc;

use sb_core::ids::SessionId;

/// Domain events the excluded presentation layer subscribes to:
/// toast display, invoice line insertion, stock adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannerEvent {
    Paired {
        session_id: SessionId,
    },
    ScanAccepted {
        payload: String,
        product_id: String,
    },
    /// A product payload was decoded while the device was not paired.
    ScanRejected {
        payload: String,
    },
    Unpaired,
}

#[async_trait]
pub trait ScannerEventPort: Send + Sync {
    async fn subscribe(&self) -> anyhow::Result<mpsc::Receiver<ScannerEvent>>;
}
