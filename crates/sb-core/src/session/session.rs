use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{DeviceId, SessionId};

/// A pairing session record
///
/// Minted by the primary device and written to the relay store. Never
/// mutated after creation; it logically expires when no subscriber
/// remains, but no TTL is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub owner_id: DeviceId,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: SessionId, owner_id: DeviceId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            owner_id,
            created_at,
        }
    }

    /// Canonical pairing URL, rendered as a QR code by the presentation layer.
    ///
    /// The `session=` query marker is the literal the payload classifier
    /// keys on; changing one without the other breaks pairing.
    pub fn pairing_url(&self, base_url: &str) -> String {
        format!("{}/scan?session={}", base_url.trim_end_matches('/'), self.id)
    }
}
