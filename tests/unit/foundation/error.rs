use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BoothError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BoothError::capture("x")
            .to_string()
            .contains("capture error:")
    );
    assert!(BoothError::render("x").to_string().contains("render error:"));
    assert!(
        BoothError::session("x")
            .to_string()
            .contains("session error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BoothError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
