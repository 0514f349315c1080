//! Canvas rendering for the starfield layer.
//!
//! Two passes per frame: the background gradient, then every star below
//! the scroll-dependent index cutoff as a filled circle.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::{StarField, brightness_scale, visible_threshold};
use crate::theme::StarfieldStyle;

/// Paint one frame at the given scroll progress.
pub fn render(
	field: &StarField,
	ctx: &CanvasRenderingContext2d,
	style: &StarfieldStyle,
	width: f64,
	height: f64,
	progress: f64,
) {
	draw_background(ctx, style, width, height);
	draw_stars(field, ctx, style, progress);
}

fn draw_background(
	ctx: &CanvasRenderingContext2d,
	style: &StarfieldStyle,
	width: f64,
	height: f64,
) {
	let Ok(gradient) = ctx.create_radial_gradient(
		width / 2.0,
		height / 2.0,
		0.0,
		width / 2.0,
		height / 2.0,
		width.max(height) * 0.8,
	) else {
		ctx.set_fill_style_str(&style.background_secondary.to_css());
		ctx.fill_rect(0.0, 0.0, width, height);
		return;
	};

	let _ = gradient.add_color_stop(0.0, &style.background.to_css());
	let _ = gradient.add_color_stop(1.0, &style.background_secondary.to_css());

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, width, height);
}

fn draw_stars(
	field: &StarField,
	ctx: &CanvasRenderingContext2d,
	style: &StarfieldStyle,
	progress: f64,
) {
	let threshold = visible_threshold(field.len(), progress);
	let brightness = brightness_scale(progress);
	let color = style.color;

	for (i, star) in field.stars.iter().enumerate() {
		if (i as f64) >= threshold {
			break;
		}

		ctx.set_fill_style_str(&format!(
			"rgba({}, {}, {}, {})",
			color.r,
			color.g,
			color.b,
			star.opacity * brightness
		));

		ctx.begin_path();
		let _ = ctx.arc(star.x, star.y, star.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}
