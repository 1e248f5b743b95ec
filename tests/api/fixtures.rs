use crate::helpers::spawn_runtime;
use status_test_support::domain::EnodeAddress;
use status_test_support::fixtures::{
    BOOTNODE_ADDRESS, COMMON_PASSWORD, MAILSERVER_ADDRESS, UNIQUE_PASSWORD, UNIQUE_PASSWORD_PREFIX,
    unique_password,
};
use std::time::Duration;

#[test]
fn common_password_never_changes() {
    assert_eq!(COMMON_PASSWORD, "qwerty");
}

#[test]
fn unique_password_changes_once_a_second_has_passed() {
    let earlier = unique_password();
    std::thread::sleep(Duration::from_millis(1100));
    let later = unique_password();
    assert_ne!(earlier, later);
    assert!(UNIQUE_PASSWORD.starts_with(UNIQUE_PASSWORD_PREFIX));
}

#[test]
fn node_addresses_parse_as_enode_uris() {
    for raw in [BOOTNODE_ADDRESS, MAILSERVER_ADDRESS] {
        let address = EnodeAddress::parse(raw.to_string())
            .unwrap_or_else(|e| panic!("{} is not a valid enode address: {}", raw, e));
        assert_eq!(address.as_ref(), raw);
    }
}

#[test]
fn unique_password_is_pinned_when_the_runtime_starts() {
    let _runtime = spawn_runtime();
    std::thread::sleep(Duration::from_millis(1100));
    assert_ne!(*UNIQUE_PASSWORD, unique_password());
}
