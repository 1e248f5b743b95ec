use crate::domain::{HexString, Passphrase};
use secrecy::Secret;

/// Credentials of an account the UI tests sign in with or recover.
#[derive(Debug, Clone)]
pub struct TestUser {
    pub password: Secret<String>,
    pub passphrase: Passphrase,
    pub username: String,
    pub public_key: HexString,
    /// Wallet address, without the `0x` prefix.
    pub address: HexString,
}
