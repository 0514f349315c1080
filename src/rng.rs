//! Small deterministic random number generator for the animation loops.
//!
//! Both canvas loops need a cheap stream of floats for spawning and
//! recycling particles. A 64-bit LCG is plenty for decorative work and
//! keeps the crate free of platform entropy requirements on the WASM
//! target; each loop owns its own instance so their streams never
//! interleave.

/// Linear congruential generator (MMIX constants), 32 output bits per step.
pub struct Rng(u64);

impl Rng {
	/// Create a generator from an arbitrary seed (e.g. the current time).
	pub fn new(seed: u64) -> Self {
		Self(seed)
	}

	fn next_u32(&mut self) -> u32 {
		self.0 = self
			.0
			.wrapping_mul(6364136223846793005)
			.wrapping_add(1442695040888963407);
		(self.0 >> 33) as u32
	}

	/// Uniform float in `[0, 1)`.
	pub fn next_f64(&mut self) -> f64 {
		f64::from(self.next_u32()) / (u32::MAX as f64 + 1.0)
	}

	/// Uniform float in `[lo, hi)`.
	pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
		lo + self.next_f64() * (hi - lo)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deterministic_reproducibility() {
		let mut a = Rng::new(12345);
		let mut b = Rng::new(12345);
		for _ in 0..32 {
			assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
		}
	}

	#[test]
	fn next_f64_half_open() {
		let mut rng = Rng::new(999);
		for _ in 0..1000 {
			let f = rng.next_f64();
			assert!((0.0..1.0).contains(&f));
		}
	}

	#[test]
	fn range_respects_bounds() {
		let mut rng = Rng::new(7);
		for _ in 0..1000 {
			let f = rng.range(0.5, 2.5);
			assert!((0.5..2.5).contains(&f));
		}
	}

	#[test]
	fn seeds_diverge() {
		let mut a = Rng::new(1);
		let mut b = Rng::new(2);
		let same = (0..16).filter(|_| a.next_f64() == b.next_f64()).count();
		assert!(same < 16);
	}
}
