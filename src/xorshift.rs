//! Xorshift128X mixing generator.

/// Seed for `s0` at the start of every digest.
pub const SEED_S0: u64 = 0x5555555555555555;
/// Seed for `s1` at the start of every digest.
pub const SEED_S1: u64 = 0xaaaaaaaaaaaaaaaa;

/// Two-word generator state, owned by a single digest computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Xorshift128X {
    s0: u64,
    s1: u64,
}

impl Xorshift128X {
    /// Fresh state at the fixed seeds.
    pub const fn new() -> Self {
        Self::from_parts(SEED_S0, SEED_S1)
    }

    pub const fn from_parts(s0: u64, s1: u64) -> Self {
        Self { s0, s1 }
    }

    pub const fn parts(&self) -> (u64, u64) {
        (self.s0, self.s1)
    }

    /// Mix `x` into the state and return the sum of the previous words.
    #[inline(always)]
    pub fn mix(&mut self, x: u64) -> u64 {
        let c = x << 30;
        let mut b = self.s0;
        let a = self.s1;

        let out = a.wrapping_add(b);

        self.s0 = a ^ c;
        b ^= b << 23;
        self.s1 = b ^ a ^ (b >> 18) ^ (a >> 5);

        out
    }
}

impl Default for Xorshift128X {
    fn default() -> Self {
        Self::new()
    }
}
