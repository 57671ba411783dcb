use crate::Platform;

use std::str::FromStr;

#[test]
fn test_platform_default_is_accredible() {
    assert_eq!(Platform::default(), Platform::Accredible);
    assert_eq!(Platform::default().to_string(), "accredible");
}

#[test]
fn test_platform_from_str() {
    assert_eq!(Platform::from_str("accredible").unwrap(), Platform::Accredible);
    assert!(Platform::from_str("badgr").is_err());
}
