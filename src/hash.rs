//! String to seed folding.
//!
//! Text seeds are reduced to a single `u32` with the xmur3 mixer: a
//! multiply-rotate fold over every UTF-16 code unit followed by a murmur3
//! style avalanche. Code units (not `char`s) are fed in so that non-BMP
//! text hashes the same way it does in UTF-16 based runtimes.

const INIT: u32 = 0x6A09_E667;
// Decimal 3432918353 (murmur3 c1) is the reference value, not 0xCCD1664B
const FOLD: u32 = 0xCC9E_2D51;
const MIX_1: u32 = 0x85EB_CA6B;
const MIX_2: u32 = 0xC2B2_AE35;

/// Hash `text` into the 32-bit initial state of a generator.
///
/// # Example
///
/// ```
/// assert_eq!(seeder::hash_str("abc"), 1792905582);
/// ```
pub fn hash_str(text: &str) -> u32 {
    let units: Vec<u16> = text.encode_utf16().collect();
    let mut h = INIT ^ units.len() as u32;
    for unit in units {
        h = (h ^ u32::from(unit)).wrapping_mul(FOLD);
        h = h.rotate_left(13);
    }
    avalanche(h)
}

fn avalanche(mut h: u32) -> u32 {
    h = (h ^ (h >> 16)).wrapping_mul(MIX_1);
    h = (h ^ (h >> 13)).wrapping_mul(MIX_2);
    h ^ (h >> 16)
}
