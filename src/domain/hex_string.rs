/// Hex-encoded bytes, optionally carrying a `0x` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexString(String);

impl HexString {
    pub fn parse(s: String) -> Result<HexString, String> {
        let digits = s.strip_prefix("0x").unwrap_or(&s);
        if digits.is_empty() {
            return Err(format!("{} holds no hex digits.", s));
        }
        if digits.len() % 2 != 0 {
            return Err(format!("{} has an odd number of hex digits.", s));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("{} is not a valid hex string.", s));
        }
        Ok(Self(s))
    }

    pub fn has_prefix(&self) -> bool {
        self.0.starts_with("0x")
    }

    /// The digits without the `0x` prefix.
    pub fn digits(&self) -> &str {
        self.0.strip_prefix("0x").unwrap_or(&self.0)
    }
}

impl AsRef<str> for HexString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
