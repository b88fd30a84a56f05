//! Deterministic random data for reproducible fixtures
//!
//! Provides a small seedable generator producing floats, integers, booleans,
//! picks, shuffles, samples, UUIDs and IDs. For a given seed and a given
//! order of calls the output is bit-for-bit identical on every run and
//! every platform, which makes it suitable for synthetic test data. It is
//! not suitable for anything security related.
//!
//! The crate exposes debug logs through the [`tracing`][tracing] crate,
//! including the resolved seed of clock seeded generators.
//!
//! ## Crate usage
//!
//! # Example
//!
//! ```
//! use seeder::Seeder;
//! # fn main() -> Result<(), seeder::SeederError> {
//! let mut seeder = Seeder::new("fixtures");
//! let user_id = seeder.uuid();
//! let role = seeder.pick(&["admin", "editor", "viewer"])?;
//! let age = seeder.int(18, 99);
//! let shortlist = seeder.sample(&[1, 2, 3, 4, 5], 2)?;
//! assert_eq!(user_id.len(), 36);
//! assert!((18..=99).contains(&age));
//! assert_eq!(shortlist.len(), 2);
//! # let _ = role;
//! # Ok(())
//! # }
//! ```
//!
//! ## Threads
//!
//! Every draw takes `&mut self`. One generator shared between threads must
//! sit behind a lock, and the interleaving of calls then decides the
//! output. Use one generator per thread when the output has to be
//! reproducible.

mod config;
mod engine;
mod error;
mod hash;
mod ident;
mod registry;
mod seeder;
mod traits;
mod types;

pub use config::{SeederConfig, SeederConfigBuilder, SeederConfigBuilderError};
pub use error::{Result, SeederError};
pub use hash::hash_str;
pub use registry::Registry;
pub use seeder::Seeder;
pub use traits::{Clock, FixedClock, SystemClock};
pub use types::{Bundle, Record, Seed, ALPHABET, DEFAULT_ID_LENGTH};
