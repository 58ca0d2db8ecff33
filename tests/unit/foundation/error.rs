use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BoothError::unknown_layout("polaroid")
            .to_string()
            .contains("unknown layout: polaroid")
    );
    assert!(
        BoothError::unknown_asset("kraken")
            .to_string()
            .contains("unknown asset: kraken")
    );
    assert!(BoothError::decode("x").to_string().contains("decode error:"));
    assert!(BoothError::encode("x").to_string().contains("encode error:"));
    assert!(
        BoothError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BoothError::storage("x").to_string().contains("storage error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BoothError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
