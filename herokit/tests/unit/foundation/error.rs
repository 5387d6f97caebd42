use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        HeroError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(HeroError::config("x").to_string().contains("config error:"));
    assert!(
        HeroError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = HeroError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
