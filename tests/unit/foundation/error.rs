use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ForgeError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        ForgeError::source_missing("x")
            .to_string()
            .contains("source missing:")
    );
    assert!(
        ForgeError::dimension_mismatch("x")
            .to_string()
            .contains("dimension mismatch:")
    );
    assert!(
        ForgeError::invalid_dimensions("x")
            .to_string()
            .contains("invalid dimensions:")
    );
    assert_eq!(ForgeError::EmptyFrameSet.to_string(), "empty frame set");
}

#[test]
fn only_configuration_errors_abort_a_batch() {
    assert!(ForgeError::configuration("dup").is_fatal_to_batch());
    assert!(!ForgeError::source_missing("gone").is_fatal_to_batch());
    assert!(!ForgeError::frame_missing("idle_0").is_fatal_to_batch());
    assert!(!ForgeError::EmptyFrameSet.is_fatal_to_batch());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ForgeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
