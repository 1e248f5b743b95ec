//! Shared values for UI test cases: accounts, peers and the copy the app
//! is expected to show.
use crate::domain::{EnodeAddress, HexString, Passphrase, TestUser};
use crate::suite::TestSuiteData;
use crate::timestamp::get_current_time;
use secrecy::Secret;
use std::sync::LazyLock;

pub static TEST_SUITE_DATA: LazyLock<TestSuiteData> = LazyLock::new(TestSuiteData::new);

pub static BASIC_USER: LazyLock<TestUser> = LazyLock::new(|| TestUser {
    password: Secret::new("newuniquepassword12".to_string()),
    passphrase: Passphrase::parse(
        "tree weekend ceiling awkward universe pyramid glimpse raven pair lounge grant grief"
            .to_string(),
    )
    .expect("Invalid basic user passphrase."),
    username: "Little Weighty Iberianmole".to_string(),
    public_key: HexString::parse(
        "0x040d3400f0ba80b2f6017a9021a66e042abc33cf7051ddf98a24a815c93d6c052ce2b7873d799f096325\
        9f41c5a1bf08133dd4f3fe63ea1cceaa1e86ebc4bc42c9"
            .to_string(),
    )
    .expect("Invalid basic user public key."),
    address: HexString::parse("f184747445c3b85ceb147dfb136067cb93d95f1d".to_string())
        .expect("Invalid basic user address."),
});

pub const COMMON_PASSWORD: &str = "qwerty";

pub const UNIQUE_PASSWORD_PREFIX: &str = "unique";

/// Fixed for the lifetime of the process, taken at first use. Test
/// harnesses force it at startup so it reflects when the run began.
pub static UNIQUE_PASSWORD: LazyLock<String> = LazyLock::new(unique_password);

/// A password that differs between runs started in different seconds.
pub fn unique_password() -> String {
    format!("{}{}", UNIQUE_PASSWORD_PREFIX, get_current_time())
}

pub const BOOTNODE_ADDRESS: &str = "enode://a8a97f126f5e3a340cb4db28a1187c325290ec08b2c9a6b1f19845ac86c46f9fac2ba13328822590\
    fd3de3acb09cc38b5a05272e583a2365ad1fa67f66c55b34@167.99.210.203:30404";

pub const MAILSERVER_ADDRESS: &str = "enode://531e252ec966b7e83f5538c19bf1cde7381cc7949026a6e499b6e998e695751aadf26d4c98d5a4eab\
    fb7cefd31c3c88d600a775f14ed5781520a88ecd25da3c6:status-offline-inbox@35.225.227.79:30504";

pub fn bootnode() -> EnodeAddress {
    EnodeAddress::parse(BOOTNODE_ADDRESS.to_string()).expect("Invalid bootnode address.")
}

pub fn mailserver() -> EnodeAddress {
    EnodeAddress::parse(MAILSERVER_ADDRESS.to_string()).expect("Invalid mailserver address.")
}

pub const CAMERA_ACCESS_ERROR_TEXT: &str = "To grant the required camera permission, please go to your system settings \
    and make sure that Status > Camera is selected.";

pub const PHOTOS_ACCESS_ERROR_TEXT: &str = "To grant the required photos permission, please go to your system settings \
    and make sure that Status > Photos is selected.";

pub const CONNECTION_NOT_SECURE_TEXT: &str = "Connection is not secure! \
    Do not sign transactions or send personal data on this site.";

pub const CONNECTION_IS_SECURE_TEXT: &str = "Connection is secure. Make sure you really trust this site \
    before signing transactions or entering personal data.";

/// Shown on first launch of nightly builds.
pub const TEST_FAIRY_WARNING_TEXT: &str = "You are using an app installed from a nightly build. \
    If you're connected to WiFi, your interactions with the app will be saved as video and logs. \
    These recordings do not save your passwords. They are used by our development team \
    to investigate possible issues and only occur if the app is install from a nightly build. \
    Nothing is recorded if the app is installed from PlayStore or TestFlight.";
