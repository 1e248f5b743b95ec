use secrecy::{ExposeSecret, Secret};

/// Number of words in an account recovery phrase.
pub const PASSPHRASE_WORD_COUNT: usize = 12;

/// A recovery phrase of exactly [`PASSPHRASE_WORD_COUNT`] lowercase words.
#[derive(Debug, Clone)]
pub struct Passphrase(Secret<String>);

impl Passphrase {
    pub fn parse(s: String) -> Result<Passphrase, String> {
        let words: Vec<&str> = s.split_whitespace().collect();
        if words.len() != PASSPHRASE_WORD_COUNT {
            return Err(format!(
                "A passphrase has {} words, got {}.",
                PASSPHRASE_WORD_COUNT,
                words.len()
            ));
        }
        if let Some(word) = words
            .iter()
            .find(|w| !w.chars().all(|c| c.is_ascii_lowercase()))
        {
            return Err(format!("`{}` is not a lowercase ASCII word.", word));
        }
        // Stored with single spaces between words
        Ok(Self(Secret::new(words.join(" "))))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.expose_secret().split(' ')
    }
}

impl ExposeSecret<String> for Passphrase {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}
