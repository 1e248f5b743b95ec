mod enode_address;
mod hex_string;
mod passphrase;
mod test_user;

pub use enode_address::EnodeAddress;
pub use hex_string::HexString;
pub use passphrase::Passphrase;
pub use test_user::TestUser;
