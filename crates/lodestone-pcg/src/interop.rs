//! Trait implementations that let `PcgRng` stand in wherever a
//! [`DeterministicRng`] or a `rand` generator is expected.

use lodestone_core::rng::DeterministicRng;
use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};

use crate::generator::PcgRng;

impl DeterministicRng for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.next_uint()
    }

    fn peek_u32(&self, steps: u32) -> u32 {
        self.peek_uint(steps)
    }

    fn jump(&mut self, steps: i64) {
        PcgRng::jump(self, steps);
    }
}

impl RngCore for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.next_uint()
    }

    /// Two consecutive draws, high word first.
    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_uint());
        let low = u64::from(self.next_uint());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}

impl SeedableRng for PcgRng {
    /// Little-endian 64-bit seed.
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seeded(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::seeded(state)
    }
}
