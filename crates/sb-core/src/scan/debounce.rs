/// Suppresses repeated delivery of one physical scan.
///
/// A code held in front of the camera decodes on many consecutive
/// frames; only the first occurrence within the window may pass.
/// Pure state, no clock dependency: callers supply `now_ms`.
#[derive(Debug)]
pub struct ScanDebouncer {
    window_ms: i64,
    last_payload: Option<String>,
    last_payload_at_ms: i64,
}

impl ScanDebouncer {
    pub fn new(window_ms: i64) -> Self {
        Self {
            window_ms,
            last_payload: None,
            last_payload_at_ms: 0,
        }
    }

    /// Returns `false` (suppress) if `payload` repeats the previous one
    /// inside the window; otherwise records it and returns `true`.
    ///
    /// A suppressed payload does not refresh the window, so a code held
    /// in view is accepted again once the window elapses.
    pub fn should_accept(&mut self, payload: &str, now_ms: i64) -> bool {
        if let Some(last) = &self.last_payload {
            if last == payload && now_ms - self.last_payload_at_ms < self.window_ms {
                return false;
            }
        }
        self.last_payload = Some(payload.to_string());
        self.last_payload_at_ms = now_ms;
        true
    }

    /// Forget the last payload, e.g. when scanning is restarted.
    pub fn reset(&mut self) {
        self.last_payload = None;
        self.last_payload_at_ms = 0;
    }
}
