//! MurmurHash3 (Austin Appleby) over sequences of machine words.
//!
//! `hash` mixes whole integers rather than bytes and seeds itself from the
//! element count, so its output is not the same as the byte-oriented
//! reference functions. The lane mixers below are the reference ones,
//! though, and can be driven directly with a seed and a byte length.
//!
//! Not suitable for anything adversarial.

const C1_64: u64 = 0x87c3_7b91_1142_53d5;
const C2_64: u64 = 0x4cf5_ad43_2745_937f;

const C1_32: u32 = 0xcc9e_2d51;
const C2_32: u32 = 0x1b87_3593;

/// 64-bit finalizer.
#[inline]
pub fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

/// 32-bit finalizer.
#[inline]
pub fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Two-lane state of MurmurHash3_x64_128.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Murmur3x64 {
    h1: u64,
    h2: u64,
}

impl Murmur3x64 {
    pub fn with_seed(seed: u64) -> Self {
        Self { h1: seed, h2: seed }
    }

    pub fn with_lanes(h1: u64, h2: u64) -> Self {
        Self { h1, h2 }
    }

    /// Mix a word into the first lane.
    #[inline]
    pub fn mix_k1(&mut self, k1: u64) {
        let k1 = k1
            .wrapping_mul(C1_64)
            .rotate_left(31)
            .wrapping_mul(C2_64);
        self.h1 ^= k1;
        self.h1 = self.h1.rotate_left(27).wrapping_add(self.h2);
        self.h1 = self.h1.wrapping_mul(5).wrapping_add(0x52dc_e729);
    }

    /// Mix a word into the second lane.
    #[inline]
    pub fn mix_k2(&mut self, k2: u64) {
        let k2 = k2
            .wrapping_mul(C2_64)
            .rotate_left(33)
            .wrapping_mul(C1_64);
        self.h2 ^= k2;
        self.h2 = self.h2.rotate_left(31).wrapping_add(self.h1);
        self.h2 = self.h2.wrapping_mul(5).wrapping_add(0x3849_5ab5);
    }

    /// Mix one 16-byte block, given as its two little-endian words.
    #[inline]
    pub fn mix_block(&mut self, k1: u64, k2: u64) {
        self.mix_k1(k1);
        self.mix_k2(k2);
    }

    /// Fold in `len` and avalanche both lanes.
    pub fn finish(self, len: u64) -> (u64, u64) {
        let mut h1 = self.h1 ^ len;
        let mut h2 = self.h2 ^ len;
        h1 = h1.wrapping_add(h2);
        h2 = h2.wrapping_add(h1);
        h1 = fmix64(h1);
        h2 = fmix64(h2);
        h1 = h1.wrapping_add(h2);
        h2 = h2.wrapping_add(h1);
        (h1, h2)
    }
}

/// Single-lane state of MurmurHash3_x86_32.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Murmur3x86 {
    h1: u32,
}

impl Murmur3x86 {
    pub fn with_seed(seed: u32) -> Self {
        Self { h1: seed }
    }

    /// Mix one 4-byte block, given as its little-endian word.
    #[inline]
    pub fn mix(&mut self, k1: u32) {
        let k1 = k1
            .wrapping_mul(C1_32)
            .rotate_left(15)
            .wrapping_mul(C2_32);
        self.h1 ^= k1;
        self.h1 = self.h1.rotate_left(13);
        self.h1 = self.h1.wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    pub fn finish(self, len: u32) -> u32 {
        fmix32(self.h1 ^ len)
    }
}

// Words go in pairs, first into lane one, second into lane two. With an odd
// count the last word still passes through lane one and the loop ends there;
// there is no separate tail step.
fn hash_words64(mut words: impl ExactSizeIterator<Item = u64>) -> u64 {
    let count = words.len() as u64;
    let mut state = Murmur3x64::with_lanes(C1_64 ^ count, C2_64 ^ count);
    while let Some(k1) = words.next() {
        state.mix_k1(k1);
        match words.next() {
            Some(k2) => state.mix_k2(k2),
            None => break,
        }
    }
    state.finish(count).0
}

fn hash_words32(words: impl ExactSizeIterator<Item = u32>) -> u32 {
    let count = words.len() as u32;
    let mut state = Murmur3x86::with_seed(C1_32 ^ count);
    for k1 in words {
        state.mix(k1);
    }
    state.finish(count)
}

/// Hash a sequence with the 64-bit (x64, two-lane) variant.
pub fn hash64(nums: &[i64]) -> i64 {
    hash_words64(nums.iter().map(|&n| n as u64)) as i64
}

/// Hash a sequence with the 32-bit (x86, one-lane) variant.
pub fn hash32(nums: &[i32]) -> i32 {
    hash_words32(nums.iter().map(|&n| n as u32)) as i32
}

/// Hash a sequence of native integers. 64-bit targets use the x64 variant,
/// everything else the x86 one, so results differ between the two.
#[cfg(target_pointer_width = "64")]
pub fn hash(nums: &[isize]) -> isize {
    hash_words64(nums.iter().map(|&n| n as u64)) as isize
}

#[cfg(not(target_pointer_width = "64"))]
pub fn hash(nums: &[isize]) -> isize {
    hash_words32(nums.iter().map(|&n| n as u32)) as isize
}

/// `hash!(x, y, z)` is `hash(&[x as isize, y as isize, z as isize])`.
#[macro_export]
macro_rules! hash {
    ($($n:expr),* $(,)?) => {{
        let nums: &[isize] = &[$(($n) as isize),*];
        $crate::hash::hash(nums)
    }};
}
