//! Four-word xorshift generator seeded from text
//!
//! Every operation uses 32-bit signed wraparound arithmetic. The output stream
//! is defined bit-for-bit by these recurrences, so existing seeds keep producing
//! the same icons.

/// Divisor that maps the unsigned 32-bit output word to a float
pub const DRAW_DIVISOR: f64 = 2_147_483_648.0;

/// Xorshift state `[x, y, z, w]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XorshiftState {
    words: [i32; 4],
}

impl XorshiftState {
    /// Create a state directly from its four words
    pub const fn from_words(words: [i32; 4]) -> Self {
        Self { words }
    }

    /// Fold a seed string into a fresh state
    ///
    /// Each UTF-16 code unit `c` at position `i` updates word `i % 4` with the
    /// Java `String.hashCode` step `word * 31 + c`, written as
    /// `(word << 5) - word + c`.
    pub fn from_seed(seed: &str) -> Self {
        let mut words = [0_i32; 4];
        for (i, unit) in seed.encode_utf16().enumerate() {
            if let Some(word) = words.get_mut(i % 4) {
                *word = (*word << 5)
                    .wrapping_sub(*word)
                    .wrapping_add(i32::from(unit));
            }
        }
        Self { words }
    }

    /// Current state words
    pub const fn words(&self) -> [i32; 4] {
        self.words
    }

    /// Advance one step and return the new `w` word
    pub const fn step(&mut self) -> i32 {
        let [x, y, z, w] = self.words;
        let t = x ^ (x << 11);
        let next = w ^ (w >> 19) ^ t ^ (t >> 8);
        self.words = [y, z, w, next];
        next
    }

    /// Advance one step and return the new word scaled by `2^31`
    ///
    /// The sign bits of `w`, `w >> 19`, `t` and `t >> 8` cancel pairwise, so the
    /// returned value always lies in `[0, 1)`.
    pub fn draw(&mut self) -> f64 {
        f64::from(self.step() as u32) / DRAW_DIVISOR
    }
}
