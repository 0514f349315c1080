//! Visual styling for the canvas layers.
//!
//! Colors and per-subsystem style structs. The host stylesheet owns the
//! page look; this module only covers what is painted onto canvases.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Starfield layer style.
#[derive(Clone, Debug)]
pub struct StarfieldStyle {
	/// Number of stars in the pool. The pool is rebuilt at this size on
	/// every viewport resize.
	pub count: usize,
	/// Star color; per-star alpha is applied on top at draw time.
	pub color: Color,
	/// Background gradient, center to edge.
	pub background: Color,
	pub background_secondary: Color,
}

impl Default for StarfieldStyle {
	fn default() -> Self {
		Self {
			count: 400,
			color: Color::rgb(255, 255, 255),
			background: Color::rgb(16, 20, 30),
			background_secondary: Color::rgb(8, 10, 16),
		}
	}
}

/// Glyph-rain overlay style.
#[derive(Clone, Debug)]
pub struct RainStyle {
	/// Glyph color.
	pub color: Color,
	/// Alpha of the dark wash painted each tick; lower leaves longer trails.
	pub fade_alpha: f64,
	/// Cell size in px; one column of glyphs per cell of width.
	pub cell_px: f64,
	/// Fixed timer step in milliseconds.
	pub tick_ms: i32,
}

impl Default for RainStyle {
	fn default() -> Self {
		Self {
			color: Color::rgb(80, 250, 123),
			fade_alpha: 0.08,
			cell_px: 16.0,
			tick_ms: 50,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(255, 255, 255).to_css(), "#ffffff");
		assert_eq!(Color::rgb(16, 20, 30).to_css(), "#10141e");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		assert_eq!(Color::rgba(0, 0, 0, 0.5).to_css(), "rgba(0, 0, 0, 0.5)");
	}
}
