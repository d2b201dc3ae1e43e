use crate::ids::SessionId;

/// Query marker written into every pairing URL by the session manager.
/// The classifier keys on this literal; the two must not drift apart.
pub const PAIRING_MARKER: &str = "session=";

/// Path segment of the product-detail route.
const PRODUCT_PATH_SEGMENT: &str = "/scan/";

/// Outcome of classifying one decoded scan string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanPayload {
    /// The payload carries a session id and drives a pairing transition.
    /// Never published as a scan event.
    Pairing(SessionId),
    /// A product reference, either extracted from a product URL or the
    /// decoded string verbatim.
    ProductRef(String),
    /// Nothing the system understands; silently droppable.
    Unrecognized,
}

/// Disambiguate a decoded scan string.
///
/// Pure and synchronous, never fails. A QR code in view may simply not
/// be one of ours, so unparseable input is `Unrecognized`, not an error.
pub fn classify(decoded: &str) -> ScanPayload {
    let decoded = decoded.trim();
    if decoded.is_empty() {
        return ScanPayload::Unrecognized;
    }

    if let Some(at) = decoded.find(PAIRING_MARKER) {
        let rest = &decoded[at + PAIRING_MARKER.len()..];
        let id = rest.split('&').next().unwrap_or_default();
        // An empty id can never have been minted; treating it as a
        // pairing payload would only arm a dead subscription.
        if id.is_empty() {
            return ScanPayload::Unrecognized;
        }
        return ScanPayload::Pairing(SessionId::from(id));
    }

    if let Some(at) = decoded.find(PRODUCT_PATH_SEGMENT) {
        let rest = &decoded[at + PRODUCT_PATH_SEGMENT.len()..];
        let id = rest
            .split(|c| c == '?' || c == '/')
            .next()
            .unwrap_or_default();
        if !id.is_empty() {
            return ScanPayload::ProductRef(id.to_string());
        }
    }

    ScanPayload::ProductRef(decoded.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_url_classifies_as_pairing() {
        assert_eq!(
            classify("https://host/scan?session=abc123"),
            ScanPayload::Pairing(SessionId::from("abc123"))
        );
    }

    #[test]
    fn test_pairing_id_stops_at_ampersand() {
        assert_eq!(
            classify("https://host/scan?session=abc123&utm=qr"),
            ScanPayload::Pairing(SessionId::from("abc123"))
        );
    }

    #[test]
    fn test_pairing_marker_wins_over_product_path() {
        // A pairing URL also contains "/scan"; the marker takes priority.
        assert_eq!(
            classify("https://host/scan/ignored?session=s9"),
            ScanPayload::Pairing(SessionId::from("s9"))
        );
    }

    #[test]
    fn test_empty_session_id_is_unrecognized() {
        assert_eq!(
            classify("https://host/scan?session="),
            ScanPayload::Unrecognized
        );
    }

    #[test]
    fn test_product_url_extracts_id() {
        assert_eq!(
            classify("https://host/scan/SKU-42?foo=1"),
            ScanPayload::ProductRef("SKU-42".to_string())
        );
    }

    #[test]
    fn test_product_url_id_stops_at_slash() {
        assert_eq!(
            classify("https://host/scan/SKU-42/details"),
            ScanPayload::ProductRef("SKU-42".to_string())
        );
    }

    #[test]
    fn test_bare_identifier_is_product_ref() {
        assert_eq!(
            classify("SKU-42"),
            ScanPayload::ProductRef("SKU-42".to_string())
        );
    }

    #[test]
    fn test_empty_input_is_unrecognized() {
        assert_eq!(classify(""), ScanPayload::Unrecognized);
        assert_eq!(classify("   "), ScanPayload::Unrecognized);
    }

    #[test]
    fn test_product_path_with_no_id_falls_back_to_verbatim() {
        assert_eq!(
            classify("https://host/scan/"),
            ScanPayload::ProductRef("https://host/scan/".to_string())
        );
    }
}
