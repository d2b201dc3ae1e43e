use serde::{Deserialize, Serialize};

use crate::ids::{DeviceId, SessionId};

/// One relayed occurrence of a decoded product-reference payload.
///
/// Immutable once published. Ordering within a session is defined by
/// `timestamp`, stamped from the publishing device's clock at publish
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanEvent {
    pub session_id: SessionId,
    /// Raw decoded text or normalized product reference.
    pub payload: String,
    /// Publishing device, for provenance only.
    pub actor_id: Option<DeviceId>,
    /// Milliseconds since the UNIX epoch, publisher's clock.
    pub timestamp: i64,
}

impl ScanEvent {
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms - self.timestamp
    }

    /// Whether the event is recent enough to surface to a subscriber.
    ///
    /// Realtime stores may replay recent history when a subscription is
    /// (re)established; anything older than the freshness window must be
    /// discarded or a stale scan could trigger a duplicate insertion.
    pub fn is_fresh(&self, now_ms: i64, freshness_window_ms: i64) -> bool {
        self.age_ms(now_ms) <= freshness_window_ms
    }
}
