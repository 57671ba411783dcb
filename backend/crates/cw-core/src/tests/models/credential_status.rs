use crate::CredentialStatus;

use std::str::FromStr;

#[test]
fn test_credential_status_round_trips_through_str() {
    for status in [CredentialStatus::Active, CredentialStatus::Hidden] {
        assert_eq!(CredentialStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_credential_status_rejects_unknown() {
    assert!(CredentialStatus::from_str("ACTIVE").is_err());
}

#[test]
fn test_credential_status_default() {
    assert_eq!(CredentialStatus::default(), CredentialStatus::Active);
}
