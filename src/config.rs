use crate::types::{Seed, ALPHABET, DEFAULT_ID_LENGTH};
use crate::{Result, SeederError};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Construction options for a [`Seeder`][crate::Seeder]
///
/// # Example
///
/// ```
/// use seeder::{FixedClock, Seeder, SeederConfigBuilder};
/// # fn main() -> Result<(), seeder::SeederError> {
/// let config = SeederConfigBuilder::default()
///     .seed(12345)
///     .id_length(8_usize)
///     .alphabet("abc")
///     .build()?;
/// let mut seeder: Seeder = Seeder::from_config(config, &FixedClock(0))?;
/// assert_eq!(seeder.id().len(), 8);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct SeederConfig {
    /// Falls back to the clock when unset
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    pub seed: Option<Seed>,
    #[builder(default = "DEFAULT_ID_LENGTH")]
    #[serde(default = "default_id_length")]
    pub id_length: usize,
    #[builder(default = "ALPHABET.to_string()", setter(into))]
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
}

impl SeederConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        match &self.alphabet {
            Some(alphabet) => check_alphabet(alphabet),
            None => Ok(()),
        }
    }
}

impl SeederConfig {
    /// Parse a config from JSON, missing fields take the builder defaults
    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_alphabet(&self.alphabet).map_err(SeederError::InvalidConfig)
    }
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            seed: None,
            id_length: DEFAULT_ID_LENGTH,
            alphabet: default_alphabet(),
        }
    }
}

fn check_alphabet(alphabet: &str) -> std::result::Result<(), String> {
    if alphabet.is_empty() {
        Err("alphabet must contain at least one character".to_string())
    } else {
        Ok(())
    }
}

fn default_id_length() -> usize {
    DEFAULT_ID_LENGTH
}

fn default_alphabet() -> String {
    ALPHABET.to_string()
}
