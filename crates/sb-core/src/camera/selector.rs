use std::cmp::Reverse;

use super::CameraDevice;

/// Labels that indicate the standard rear wide lens.
const PREFERRED_KEYWORDS: [&str; 4] = ["main", "wide", "back", "rear"];

/// Labels that indicate secondary lenses unsuitable for close-focus
/// barcode reading.
const PENALIZED_KEYWORDS: [&str; 5] = ["ultra", "tele", "macro", "depth", "zoom"];

/// Pick the camera most suitable for barcode/QR scanning.
///
/// Phones routinely expose three-plus rear lenses (wide, ultrawide,
/// telephoto); naively taking the first enumerated device is
/// unreliable. Deterministic: ties break to the earliest enumerated
/// device.
pub fn select_scanning_camera(devices: &[CameraDevice]) -> Option<&CameraDevice> {
    match devices {
        [] => None,
        [only] => Some(only),
        _ => devices
            .iter()
            .enumerate()
            .max_by_key(|(index, device)| (score(device, *index), Reverse(*index)))
            .map(|(_, device)| device),
    }
}

fn score(device: &CameraDevice, index: usize) -> i32 {
    let label = device.label.to_lowercase();
    let mut score = 0;

    for keyword in PREFERRED_KEYWORDS {
        if label.contains(keyword) {
            score += 10;
        }
    }
    for keyword in PENALIZED_KEYWORDS {
        if label.contains(keyword) {
            score -= 15;
        }
    }
    // Many platforms label the primary sensor index 0.
    if label.contains('0') {
        score += 5;
    }
    // Weak tie-break favoring the platform-reported default.
    if index == 0 {
        score += 3;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cameras(labels: &[&str]) -> Vec<CameraDevice> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| CameraDevice::new(format!("cam-{i}"), *label))
            .collect()
    }

    #[test]
    fn test_no_camera_returns_none() {
        assert!(select_scanning_camera(&[]).is_none());
    }

    #[test]
    fn test_single_camera_is_returned_unscored() {
        let devices = cameras(&["Telephoto Camera"]);
        assert_eq!(select_scanning_camera(&devices), Some(&devices[0]));
    }

    #[test]
    fn test_back_wide_beats_ultra_wide_and_front() {
        let devices = cameras(&["Front Camera", "Back Wide Camera", "Back Ultra Wide Camera"]);
        let selected = select_scanning_camera(&devices).unwrap();
        assert_eq!(selected.label, "Back Wide Camera");
    }

    #[test]
    fn test_secondary_lens_keywords_are_penalized() {
        let devices = cameras(&["Back Telephoto Camera", "Back Camera"]);
        let selected = select_scanning_camera(&devices).unwrap();
        assert_eq!(selected.label, "Back Camera");
    }

    #[test]
    fn test_index_zero_label_gets_bonus() {
        let devices = cameras(&["camera2 1, facing front", "camera2 0, facing back"]);
        let selected = select_scanning_camera(&devices).unwrap();
        assert_eq!(selected.label, "camera2 0, facing back");
    }

    #[test]
    fn test_tie_breaks_to_enumeration_order() {
        let devices = cameras(&["Back Camera", "Rear Camera"]);
        let selected = select_scanning_camera(&devices).unwrap();
        assert_eq!(selected.label, "Back Camera");
    }

    #[test]
    fn test_unlabeled_devices_fall_back_to_first() {
        let devices = cameras(&["", "", ""]);
        let selected = select_scanning_camera(&devices).unwrap();
        assert_eq!(selected.id, "cam-0");
    }
}
