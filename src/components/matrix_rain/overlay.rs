//! Fullscreen glyph-rain overlay behind an owned handle.
//!
//! Unlike the starfield, this loop runs on a fixed-step `setInterval`
//! timer and is explicitly cancellable: the handle owns the interval id,
//! the tick closure, and the overlay canvas, and [`RainOverlay::stop`]
//! tears all three down. Dropping the handle without calling `stop`
//! leaves the overlay running for the life of the page.

use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::columns::GlyphRain;
use crate::rng::Rng;
use crate::theme::{Color, RainStyle};

/// A running rain loop. Obtained from [`RainOverlay::start`], consumed by
/// [`RainOverlay::stop`].
pub struct RainOverlay {
	canvas: HtmlCanvasElement,
	interval_id: i32,
	_tick: Closure<dyn FnMut()>,
}

impl RainOverlay {
	/// Create the overlay canvas and start the timer loop.
	///
	/// Returns `None` if any part of the document surface is missing, in
	/// which case nothing was mounted and nothing runs.
	pub fn start(style: &RainStyle) -> Option<Self> {
		let window = web_sys::window()?;
		let document = window.document()?;
		let body = document.body()?;

		let w = window.inner_width().ok()?.as_f64()?;
		let h = window.inner_height().ok()?.as_f64()?;

		let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
		canvas.set_class_name("glyph-rain-canvas");
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		let css = canvas.style();
		let _ = css.set_property("position", "fixed");
		let _ = css.set_property("top", "0");
		let _ = css.set_property("left", "0");
		let _ = css.set_property("z-index", "40");
		let _ = css.set_property("pointer-events", "none");
		body.append_child(&canvas).ok()?;

		let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;

		let mut rng = Rng::new(js_sys::Date::now() as u64);
		let mut rain = GlyphRain::new(w, h, style.cell_px, &mut rng);

		let cell = style.cell_px;
		let glyph_css = style.color.to_css();
		let wash_css = Color::rgba(0, 0, 0, style.fade_alpha).to_css();
		let font = format!("{cell}px monospace");

		let tick = Closure::new(move || {
			ctx.set_fill_style_str(&wash_css);
			ctx.fill_rect(0.0, 0.0, w, h);

			ctx.set_fill_style_str(&glyph_css);
			ctx.set_font(&font);
			for (i, drop) in rain.drops.iter().enumerate() {
				let glyph = GlyphRain::glyph(&mut rng);
				let _ = ctx.fill_text(
					&glyph.to_string(),
					i as f64 * cell,
					drop * cell,
				);
			}
			rain.tick(&mut rng);
		});
		let interval_id = window
			.set_interval_with_callback_and_timeout_and_arguments_0(
				tick.as_ref().unchecked_ref(),
				style.tick_ms,
			)
			.ok()?;

		info!("glyph rain engaged");
		Some(Self {
			canvas,
			interval_id,
			_tick: tick,
		})
	}

	/// Clear the repeating timer and remove the overlay canvas.
	pub fn stop(self) {
		if let Some(window) = web_sys::window() {
			window.clear_interval_with_handle(self.interval_id);
		}
		self.canvas.remove();
		info!("glyph rain stopped");
	}
}
