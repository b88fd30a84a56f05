use crate::config::SeederConfig;
use crate::engine::Mulberry32;
use crate::registry::Registry;
use crate::traits::{Clock, SystemClock};
use crate::types::{Bundle, Record, Seed, ALPHABET, DEFAULT_ID_LENGTH};
use crate::{Result, SeederError};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

/// Deterministic random value generator
///
/// Every method that returns a random value advances the internal state,
/// so the output depends on the seed and on the exact order of calls.
/// The generator takes `&mut self` for every draw; share one instance
/// across threads only behind a lock, or give each thread its own.
#[derive(Debug, Clone)]
pub struct Seeder<T = Record> {
    rng: Mulberry32,
    registry: Registry<T>,
    pub(crate) id_length: usize,
    pub(crate) alphabet: Vec<char>,
}

impl Seeder {
    /// Create a generator from a number or text seed
    ///
    /// # Examples
    ///
    /// ```
    /// use seeder::Seeder;
    /// let mut a = Seeder::new(12345);
    /// let mut b = Seeder::new(12345);
    /// assert_eq!(a.float(), b.float());
    /// assert_eq!(Seeder::new("abc").float(), 0.8865935776848346);
    /// ```
    pub fn new<S: Into<Seed>>(seed: S) -> Self {
        Self::with_seed(seed)
    }

    /// Create a generator seeded from the wall clock
    pub fn from_time() -> Self {
        Self::with_clock(&SystemClock)
    }
}

impl<T> Seeder<T> {
    /// [`Seeder::new`] for a registry holding `T`
    pub fn with_seed<S: Into<Seed>>(seed: S) -> Self {
        let seed = seed.into();
        Self::assemble(Some(seed), DEFAULT_ID_LENGTH, ALPHABET.chars().collect(), &SystemClock)
    }

    /// Seed from the current time of `clock`
    pub fn with_clock<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::assemble(None, DEFAULT_ID_LENGTH, ALPHABET.chars().collect(), clock)
    }

    /// Build from a config, `clock` is only read when the config has no seed
    pub fn from_config<C: Clock + ?Sized>(config: SeederConfig, clock: &C) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(
            config.seed,
            config.id_length,
            config.alphabet.chars().collect(),
            clock,
        ))
    }

    #[instrument(skip(alphabet, clock))]
    fn assemble<C: Clock + ?Sized>(
        seed: Option<Seed>,
        id_length: usize,
        alphabet: Vec<char>,
        clock: &C,
    ) -> Self {
        // The state is logged so clock seeded runs can be replayed with Seeder::new(state)
        let state = match seed {
            Some(seed) => {
                let state = seed.resolve();
                debug!("Seeded from {} with state {}", seed, state);
                state
            }
            None => {
                let state = clock.now_millis() as u32;
                debug!("Seeded from clock with state {}", state);
                state
            }
        };
        Self {
            rng: Mulberry32::new(state),
            registry: Registry::new(),
            id_length,
            alphabet,
        }
    }

    fn next(&mut self) -> f64 {
        self.rng.next_f64()
    }

    /// Float in `[0, 1)`
    pub fn float(&mut self) -> f64 {
        self.float_range(0.0, 1.0)
    }

    /// `min + r * (max - min)` for a fresh draw `r`
    ///
    /// Bounds are not checked, `max < min` yields values in `(max, min]`.
    pub fn float_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next() * (max - min)
    }

    /// Integer in `[min, max]`, both inclusive
    ///
    /// Computed as `floor(float_range(min, max + 1))`. An inverted range is
    /// not rejected and still produces a deterministic value.
    ///
    /// ```
    /// let mut seeder = seeder::Seeder::new(7);
    /// assert_eq!(seeder.int(5, 5), 5);
    /// ```
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        self.float_range(min as f64, max as f64 + 1.0).floor() as i64
    }

    /// Fair coin flip
    pub fn bool(&mut self) -> bool {
        self.bool_with(0.5)
    }

    /// `true` with the given probability
    pub fn bool_with(&mut self, probability: f64) -> bool {
        self.next() < probability
    }

    /// One element of `items`
    pub fn pick<'a, U>(&mut self, items: &'a [U]) -> Result<&'a U> {
        if items.is_empty() {
            return Err(SeederError::EmptyInput);
        }
        let idx = self.int(0, items.len() as i64 - 1) as usize;
        // Guards against float rounding landing exactly on `len`
        Ok(&items[idx.min(items.len() - 1)])
    }

    /// Shuffled copy of `items`, the input is left untouched
    ///
    /// Fisher-Yates from the last index down to 1, one draw per swap.
    pub fn shuffle<U: Clone>(&mut self, items: &[U]) -> Vec<U> {
        let mut copy = items.to_vec();
        for i in (1..copy.len()).rev() {
            let j = self.int(0, i as i64) as usize;
            copy.swap(i, j.min(i));
        }
        copy
    }

    /// `count` distinct positions of `items`, without replacement
    ///
    /// The whole sequence is shuffled regardless of `count`, so the number
    /// of draws only depends on `items.len()`.
    pub fn sample<U: Clone>(&mut self, items: &[U], count: usize) -> Result<Vec<U>> {
        if count > items.len() {
            return Err(SeederError::CountExceedsSize {
                count,
                len: items.len(),
            });
        }
        trace!("Sampling {} of {}", count, items.len());
        let mut shuffled = self.shuffle(items);
        shuffled.truncate(count);
        Ok(shuffled)
    }

    /// Merge `bundle` into the registry, same named categories are replaced
    pub fn use_bundle<I, K>(&mut self, bundle: I)
    where
        I: IntoIterator<Item = (K, Vec<T>)>,
        K: Into<String>,
    {
        self.registry.merge(bundle)
    }

    /// Everything registered so far
    pub fn data(&self) -> &Bundle<T> {
        self.registry.data()
    }

    /// Records registered under `name`
    pub fn category(&self, name: &str) -> Option<&[T]> {
        self.registry.category(name)
    }
}

impl<T: DeserializeOwned> Seeder<T> {
    /// Merge a JSON object of arrays into the registry
    pub fn use_json(&mut self, s: &str) -> Result<()> {
        self.registry.merge_json(s)
    }
}
