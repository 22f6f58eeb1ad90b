use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ArtError::invalid_range(4, 3)
            .to_string()
            .contains("invalid depth range:")
    );
    assert!(
        ArtError::invalid_dimensions(0, 10)
            .to_string()
            .contains("invalid dimensions: 0x10")
    );
    assert!(
        ArtError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ArtError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn invalid_range_keeps_unclamped_values() {
    match ArtError::invalid_range(-1, -5) {
        ArtError::InvalidRange {
            min_depth,
            max_depth,
        } => {
            assert_eq!(min_depth, -1);
            assert_eq!(max_depth, -5);
        }
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ArtError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
