use crate::hash::hash_str;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Characters used by generated IDs: digits, then uppercase, then lowercase
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
/// Length of an ID when none is configured
pub const DEFAULT_ID_LENGTH: usize = 21;
/// `x` is a free hex digit, `y` the variant digit
pub(crate) const UUID_TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";

/// Default element type of the registry, accepts any JSON shaped value
pub type Record = serde_json::Value;

/// Named collections of records, keyed by category
pub type Bundle<T = Record> = BTreeMap<String, Vec<T>>;

/// Initial value a generator is constructed from
///
/// Numbers are truncated to 32 bits with two's complement wraparound,
/// text is folded with [`hash_str`][crate::hash_str].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Seed {
    /// Explicit 32-bit state
    Number(u32),
    /// Text hashed into a 32-bit state
    Text(String),
}

impl Seed {
    /// The 32-bit state this seed starts a generator at
    pub fn resolve(&self) -> u32 {
        match self {
            Self::Number(n) => *n,
            Self::Text(text) => hash_str(text),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(text) => write!(f, "{:?}", text),
        }
    }
}

// Any JSON integer is accepted and wrapped the same way the `From` impls do
impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeedVisitor;

        impl<'de> Visitor<'de> for SeedVisitor {
            type Value = Seed;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or a string seed")
            }

            fn visit_i64<E: de::Error>(self, n: i64) -> Result<Seed, E> {
                Ok(Seed::from(n))
            }

            fn visit_u64<E: de::Error>(self, n: u64) -> Result<Seed, E> {
                Ok(Seed::from(n))
            }

            fn visit_str<E: de::Error>(self, text: &str) -> Result<Seed, E> {
                Ok(Seed::from(text))
            }

            fn visit_string<E: de::Error>(self, text: String) -> Result<Seed, E> {
                Ok(Seed::from(text))
            }
        }

        deserializer.deserialize_any(SeedVisitor)
    }
}

macro_rules! seed_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Seed {
                fn from(n: $t) -> Self {
                    Self::Number(n as u32)
                }
            }
        )*
    };
}

seed_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Seed {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
