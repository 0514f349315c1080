//! Star pool and the scroll-coupled visibility policy.
//!
//! Pure state, no DOM access. The canvas component drives one [`StarField`]
//! per viewport: rebuilt wholesale on resize, advanced once per animation
//! frame, and rendered through the index cutoff computed from the page's
//! scroll position.

use crate::rng::Rng;

/// Vertical drift per frame, multiplied by each star's depth.
pub const FALL_SPEED: f64 = 0.2;

/// Twinkle bounce band. Opacity may overshoot by at most one twinkle step
/// before the direction flip pulls it back.
const OPACITY_MIN: f64 = 0.1;
const OPACITY_MAX: f64 = 0.8;

/// Fraction of the pool that stays visible at the top of the page.
const MIN_VISIBLE_FRACTION: f64 = 0.1;

/// A single star.
#[derive(Clone, Debug)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	/// Depth factor in `[0.5, 2.5)`; closer stars fall faster.
	pub depth: f64,
	pub radius: f64,
	pub opacity: f64,
	pub twinkle_speed: f64,
	/// `+1.0` brightening, `-1.0` dimming.
	pub twinkle_dir: f64,
}

impl Star {
	/// Fresh star anywhere on screen, used when (re)building the pool so
	/// the field starts pre-filled rather than raining in from the top.
	fn spawn(rng: &mut Rng, width: f64, height: f64) -> Self {
		let mut star = Self {
			x: 0.0,
			y: rng.range(0.0, height),
			depth: 0.0,
			radius: 0.0,
			opacity: 0.0,
			twinkle_speed: 0.0,
			twinkle_dir: 1.0,
		};
		star.randomize(rng, width);
		star
	}

	/// Re-roll everything except the vertical position.
	fn randomize(&mut self, rng: &mut Rng, width: f64) {
		self.x = rng.range(0.0, width);
		self.depth = rng.range(0.5, 2.5);
		self.radius = rng.range(0.0, 1.5);
		self.opacity = rng.range(OPACITY_MIN, 0.6);
		self.twinkle_speed = rng.range(0.0, 0.05);
		self.twinkle_dir = 1.0;
	}

	/// Recycle in place: same pool slot, fresh fields, parked just above
	/// the top edge so it falls back into view on subsequent frames.
	fn respawn_above(&mut self, rng: &mut Rng, width: f64) {
		self.randomize(rng, width);
		self.y = -(self.radius + 1.0);
	}

	fn advance(&mut self, rng: &mut Rng, width: f64, height: f64) {
		self.y += self.depth * FALL_SPEED;

		self.opacity += self.twinkle_speed * self.twinkle_dir;
		if self.opacity > OPACITY_MAX || self.opacity < OPACITY_MIN {
			self.twinkle_dir = -self.twinkle_dir;
		}

		if self.y > height {
			self.respawn_above(rng, width);
		}
	}
}

/// Fixed-length, index-ordered star pool sized to one viewport.
///
/// Insertion order matters: the scroll-dependent cutoff in
/// [`visible_threshold`] selects the first N slots, so the same leading
/// subset is always the visible one at a given scroll depth.
pub struct StarField {
	pub stars: Vec<Star>,
	width: f64,
	height: f64,
}

impl StarField {
	pub fn new(count: usize, width: f64, height: f64, rng: &mut Rng) -> Self {
		let stars = (0..count).map(|_| Star::spawn(rng, width, height)).collect();
		Self {
			stars,
			width,
			height,
		}
	}

	/// Advance every star by one frame. Stars leaving the bottom edge are
	/// recycled in their slot; the pool never grows or shrinks.
	pub fn update(&mut self, rng: &mut Rng) {
		for star in &mut self.stars {
			star.advance(rng, self.width, self.height);
		}
	}

	pub fn len(&self) -> usize {
		self.stars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stars.is_empty()
	}
}

/// Normalized scroll position in `[0, 1]`.
///
/// Pages shorter than the viewport have no scroll track; that degenerate
/// denominator reads as the top of the page.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
	let track = scroll_height - viewport_height;
	if track <= 0.0 {
		return 0.0;
	}
	(scroll_y / track).clamp(0.0, 1.0)
}

/// Index cutoff for the current frame: stars with index strictly below the
/// returned value are drawn. Grows quadratically from 10% of the pool at
/// the top of the page to the full pool at the bottom.
pub fn visible_threshold(count: usize, progress: f64) -> f64 {
	count as f64 * (MIN_VISIBLE_FRACTION + progress * progress * (1.0 - MIN_VISIBLE_FRACTION))
}

/// Global brightness factor applied on top of each star's own opacity, so
/// the field reads faint near the top of the page and bright at the bottom.
pub fn brightness_scale(progress: f64) -> f64 {
	0.5 + progress * 0.5
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(count: usize, width: f64, height: f64) -> (StarField, Rng) {
		let mut rng = Rng::new(42);
		let field = StarField::new(count, width, height, &mut rng);
		(field, rng)
	}

	#[test]
	fn pool_length_is_invariant_under_updates() {
		for count in [0, 1, 40, 400] {
			let (mut field, mut rng) = field(count, 800.0, 600.0);
			for _ in 0..500 {
				field.update(&mut rng);
				assert_eq!(field.len(), count);
			}
		}
	}

	#[test]
	fn spawn_ranges_are_respected() {
		let (field, _) = field(400, 800.0, 600.0);
		for star in &field.stars {
			assert!((0.0..800.0).contains(&star.x));
			assert!((0.0..600.0).contains(&star.y));
			assert!((0.5..2.5).contains(&star.depth));
			assert!((0.0..1.5).contains(&star.radius));
			assert!((0.1..0.6).contains(&star.opacity));
			assert!((0.0..0.05).contains(&star.twinkle_speed));
			assert_eq!(star.twinkle_dir, 1.0);
		}
	}

	#[test]
	fn opacity_stays_within_bounce_band() {
		let (mut field, mut rng) = field(100, 800.0, 600.0);
		for _ in 0..2000 {
			field.update(&mut rng);
			for star in &field.stars {
				// One twinkle step of overshoot is allowed before the
				// direction flip corrects it.
				assert!(star.opacity >= 0.1 - star.twinkle_speed - 1e-12);
				assert!(star.opacity <= 0.8 + star.twinkle_speed + 1e-12);
			}
		}
	}

	#[test]
	fn star_leaving_the_bottom_is_recycled_above_the_top() {
		let (mut field, mut rng) = field(3, 800.0, 600.0);
		field.stars[0].y = 0.0;
		field.stars[1].y = 600.1;
		field.stars[2].y = 0.0;
		let marker = field.stars[2].x;
		field.update(&mut rng);
		assert!(field.stars[1].y < 0.0, "recycled star must sit above the top edge");
		assert_eq!(field.len(), 3);
		// Neighbors keep their slots; only slot 1 was re-rolled.
		assert_eq!(field.stars[2].x, marker);
	}

	#[test]
	fn falling_speed_scales_with_depth() {
		let (mut field, mut rng) = field(2, 800.0, 600.0);
		field.stars[0].y = 0.0;
		field.stars[1].y = 0.0;
		let (d0, d1) = (field.stars[0].depth, field.stars[1].depth);
		field.update(&mut rng);
		assert!((field.stars[0].y - d0 * FALL_SPEED).abs() < 1e-12);
		assert!((field.stars[1].y - d1 * FALL_SPEED).abs() < 1e-12);
	}

	#[test]
	fn scroll_progress_clamps_and_handles_short_pages() {
		assert_eq!(scroll_progress(0.0, 3000.0, 800.0), 0.0);
		assert_eq!(scroll_progress(2200.0, 3000.0, 800.0), 1.0);
		assert_eq!(scroll_progress(5000.0, 3000.0, 800.0), 1.0);
		assert_eq!(scroll_progress(-10.0, 3000.0, 800.0), 0.0);
		// Page shorter than the viewport: no track, treated as the top.
		assert_eq!(scroll_progress(0.0, 600.0, 800.0), 0.0);
		assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
	}

	#[test]
	fn threshold_endpoints() {
		assert_eq!(visible_threshold(400, 0.0), 40.0);
		assert_eq!(visible_threshold(400, 1.0), 400.0);
	}

	#[test]
	fn threshold_is_monotone_in_progress() {
		let mut prev = 0.0;
		for i in 0..=100 {
			let t = visible_threshold(400, f64::from(i) / 100.0);
			assert!(t >= prev);
			prev = t;
		}
	}

	fn eligible(count: usize, progress: f64) -> usize {
		let threshold = visible_threshold(count, progress);
		(0..count).filter(|&i| (i as f64) < threshold).count()
	}

	#[test]
	fn top_of_page_draws_the_first_ten_percent_at_half_brightness() {
		assert_eq!(eligible(400, 0.0), 40);
		assert_eq!(brightness_scale(0.0), 0.5);
	}

	#[test]
	fn bottom_of_page_draws_everything_at_full_brightness() {
		assert_eq!(eligible(400, 1.0), 400);
		assert_eq!(brightness_scale(1.0), 1.0);
	}

	#[test]
	fn midpoint_scenario() {
		// 400 * (0.1 + 0.25 * 0.9) = 130
		assert_eq!(visible_threshold(400, 0.5), 130.0);
		assert_eq!(eligible(400, 0.5), 130);
	}

	#[test]
	fn rebuild_restores_the_configured_size() {
		let mut rng = Rng::new(9);
		let mut field = StarField::new(25, 800.0, 600.0, &mut rng);
		field.stars.truncate(3);
		field = StarField::new(400, 1024.0, 768.0, &mut rng);
		assert_eq!(field.len(), 400);
	}
}
