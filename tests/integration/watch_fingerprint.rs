use std::error::Error;
use std::fs;

use lessonsched::watch::{compute_hash_for_paths, InputFingerprint};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn fingerprint_only_changes_with_content() -> TestResult {
    let dir = tempfile::tempdir()?;
    let plan = dir.path().join("plan.json");
    let config = dir.path().join("Lessonsched.toml");
    fs::write(&plan, "{}")?;

    let mut fp = InputFingerprint::new(vec![plan.clone(), config.clone()]);
    assert!(fp.refresh()?, "first refresh always reports a change");
    assert!(!fp.refresh()?);

    // Rewriting identical bytes is not a change.
    fs::write(&plan, "{}")?;
    assert!(!fp.refresh()?);

    fs::write(&plan, r#"{"title":"x"}"#)?;
    assert!(fp.refresh()?);

    // A config file appearing counts as a change.
    fs::write(&config, "[schedule]\n")?;
    assert!(fp.refresh()?);
    assert!(!fp.refresh()?);
    Ok(())
}

#[test]
fn hash_ignores_path_order() -> TestResult {
    let dir = tempfile::tempdir()?;
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::write(&a, "alpha")?;
    fs::write(&b, "beta")?;

    assert_eq!(
        compute_hash_for_paths([&a, &b])?,
        compute_hash_for_paths([&b, &a])?
    );

    Ok(())
}
