#[test]
fn version_is_not_empty() {
    let v = embedgen_core::version();
    assert!(!v.is_empty(), "version string should not be empty");
}
