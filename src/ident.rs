//! UUID v4 and alphabet ID synthesis.

use crate::types::UUID_TEMPLATE;
use crate::{Result, Seeder, SeederError};

impl<T> Seeder<T> {
    /// Random version 4 UUID in the 8-4-4-4-12 layout
    ///
    /// Each free hex digit and the variant digit take one draw, the version
    /// digit and hyphens take none.
    pub fn uuid(&mut self) -> String {
        UUID_TEMPLATE
            .chars()
            .map(|c| match c {
                'x' => hex_digit(self.int(0, 15)),
                'y' => hex_digit((self.int(0, 15) & 0x3) | 0x8),
                literal => literal,
            })
            .collect()
    }

    /// ID of the configured length over the configured alphabet
    pub fn id(&mut self) -> String {
        let len = self.id_length;
        self.id_with_length(len)
    }

    /// ID of `len` characters over the configured alphabet
    pub fn id_with_length(&mut self, len: usize) -> String {
        let alphabet = self.alphabet.clone();
        // Every constructor validates the alphabet as non-empty
        self.id_from(&alphabet, len)
            .expect("configured alphabet is never empty")
    }

    /// ID of `len` characters, each picked independently from `alphabet`
    ///
    /// Fails with [`SeederError::EmptyInput`] only when at least one
    /// character is requested from an empty alphabet.
    pub fn id_from(&mut self, alphabet: &[char], len: usize) -> Result<String> {
        if len > 0 && alphabet.is_empty() {
            return Err(SeederError::EmptyInput);
        }
        (0..len).map(|_| self.pick(alphabet).map(|c| *c)).collect()
    }
}

fn hex_digit(n: i64) -> char {
    std::char::from_digit(n as u32, 16).unwrap_or('0')
}
