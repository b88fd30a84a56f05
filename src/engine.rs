//! The mulberry32 state machine every draw is derived from.

const INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Single 32-bit state generator.
///
/// All arithmetic wraps at 32 bits and all right shifts are logical, which
/// keeps the output stream bit-identical to every other mulberry32 port.
#[derive(Clone)]
pub(crate) struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub(crate) const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return the mixed output.
    pub(crate) fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(s | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`.
    pub(crate) fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}

// State is never printed, only drawn from.
impl std::fmt::Debug for Mulberry32 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mulberry32").finish_non_exhaustive()
    }
}
