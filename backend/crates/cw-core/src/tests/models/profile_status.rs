use crate::ProfileStatus;

use std::str::FromStr;

#[test]
fn test_profile_status_as_str() {
    assert_eq!(ProfileStatus::Active.as_str(), "active");
    assert_eq!(ProfileStatus::Inactive.as_str(), "inactive");
}

#[test]
fn test_profile_status_from_str() {
    assert_eq!(
        ProfileStatus::from_str("active").unwrap(),
        ProfileStatus::Active
    );
    assert_eq!(
        ProfileStatus::from_str("inactive").unwrap(),
        ProfileStatus::Inactive
    );
    assert!(ProfileStatus::from_str("deleted").is_err());
}

#[test]
fn test_profile_status_default() {
    assert_eq!(ProfileStatus::default(), ProfileStatus::Active);
}
