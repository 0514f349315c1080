//! Per-column fall state for the glyph rain.
//!
//! Pure state, no DOM access. One column per cell of canvas width; each
//! tick every column advances one row, and columns that have fallen past
//! the bottom edge restart from the top with a small probability so the
//! restarts stay staggered.

use crate::rng::Rng;

/// Glyphs the rain is drawn from: half-width-ish katakana plus digits.
pub const GLYPHS: &[char] = &[
	'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ',
	'タ', 'チ', 'ツ', 'テ', 'ト', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Probability that an off-screen column restarts on a given tick.
const RESTART_CHANCE: f64 = 0.025;

/// Fall positions, in row units, for every column of the overlay.
pub struct GlyphRain {
	/// Current row per column. Fractional starts keep the first sweep from
	/// arriving as a solid line.
	pub drops: Vec<f64>,
	rows: f64,
}

impl GlyphRain {
	/// Build column state for a canvas of `width`×`height` px with square
	/// cells of `cell` px.
	pub fn new(width: f64, height: f64, cell: f64, rng: &mut Rng) -> Self {
		let columns = (width / cell).ceil().max(1.0) as usize;
		let rows = (height / cell).max(1.0);
		let drops = (0..columns).map(|_| rng.range(-rows, 0.0)).collect();
		Self { drops, rows }
	}

	/// Advance every column one row; columns past the bottom edge restart
	/// from the top with [`RESTART_CHANCE`] per tick.
	pub fn tick(&mut self, rng: &mut Rng) {
		for drop in &mut self.drops {
			if *drop > self.rows && rng.next_f64() < RESTART_CHANCE {
				*drop = 0.0;
			} else {
				*drop += 1.0;
			}
		}
	}

	/// Pick a glyph for one cell.
	pub fn glyph(rng: &mut Rng) -> char {
		GLYPHS[(rng.next_f64() * GLYPHS.len() as f64) as usize]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn one_column_per_cell_of_width() {
		let mut rng = Rng::new(1);
		assert_eq!(GlyphRain::new(800.0, 600.0, 16.0, &mut rng).drops.len(), 50);
		assert_eq!(GlyphRain::new(801.0, 600.0, 16.0, &mut rng).drops.len(), 51);
		// Degenerate widths still get one column.
		assert_eq!(GlyphRain::new(0.0, 600.0, 16.0, &mut rng).drops.len(), 1);
	}

	#[test]
	fn columns_start_above_the_canvas() {
		let mut rng = Rng::new(2);
		let rain = GlyphRain::new(320.0, 240.0, 16.0, &mut rng);
		for &drop in &rain.drops {
			assert!(drop < 0.0);
			assert!(drop >= -(240.0 / 16.0));
		}
	}

	#[test]
	fn on_screen_columns_advance_one_row_per_tick() {
		let mut rng = Rng::new(3);
		let mut rain = GlyphRain::new(320.0, 240.0, 16.0, &mut rng);
		let before = rain.drops.clone();
		rain.tick(&mut rng);
		for (a, b) in before.iter().zip(&rain.drops) {
			assert_eq!(b - a, 1.0);
		}
	}

	#[test]
	fn columns_eventually_restart_from_the_top() {
		let mut rng = Rng::new(4);
		let mut rain = GlyphRain::new(160.0, 160.0, 16.0, &mut rng);
		let mut saw_restart = false;
		let mut prev = rain.drops.clone();
		for _ in 0..5000 {
			rain.tick(&mut rng);
			for (a, b) in prev.iter().zip(&rain.drops) {
				if *b == 0.0 && *a > 0.0 {
					saw_restart = true;
					// Restarts only happen past the bottom edge.
					assert!(*a > 160.0 / 16.0);
				}
			}
			prev = rain.drops.clone();
		}
		assert!(saw_restart);
	}

	#[test]
	fn glyphs_come_from_the_alphabet() {
		let mut rng = Rng::new(5);
		for _ in 0..500 {
			assert!(GLYPHS.contains(&GlyphRain::glyph(&mut rng)));
		}
	}
}
