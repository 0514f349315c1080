//! Leptos component wrapping the starfield background canvas.
//!
//! The component owns a viewport-sized canvas pinned behind the page
//! content. An animation loop runs via `requestAnimationFrame` for the
//! lifetime of the page, advancing the star pool and rendering the
//! scroll-dependent subset each frame. A window resize discards and
//! rebuilds the pool at the new geometry.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::field::{StarField, scroll_progress};
use super::render;
use crate::rng::Rng;
use crate::theme::StarfieldStyle;

/// Star pool plus the RNG stream that feeds its recycling.
struct FieldContext {
	field: StarField,
	rng: Rng,
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w, h))
}

/// Current scroll offset and maximum scroll extent, read fresh per frame.
fn scroll_state(window: &Window) -> (f64, f64, f64) {
	let scroll_y = window.scroll_y().unwrap_or(0.0);
	let scroll_height = window
		.document()
		.and_then(|d| d.document_element())
		.map(|e| f64::from(e.scroll_height()))
		.unwrap_or(0.0);
	let viewport = window
		.inner_height()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0);
	(scroll_y, scroll_height, viewport)
}

/// Renders the decorative starfield behind the page.
///
/// If the canvas element never materializes the component is a silent
/// no-op; the rest of the page works without it.
#[component]
pub fn StarfieldCanvas(#[prop(optional)] style: StarfieldStyle) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some((w, h)) = viewport_size(&window) else {
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Ok(Some(ctx_obj)) = canvas.get_context("2d") else {
			return;
		};
		let Ok(ctx) = ctx_obj.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};

		let mut rng = Rng::new(js_sys::Date::now() as u64);
		let field = StarField::new(style.count, w, h, &mut rng);
		*context_init.borrow_mut() = Some(FieldContext { field, rng });

		let count = style.count;
		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let Some((nw, nh)) = viewport_size(&win) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			// Wholesale rebuild at the configured size; rescaling the
			// existing pool would distort star shapes after aspect changes.
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.field = StarField::new(count, nw, nh, &mut c.rng);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		let (canvas_anim, style_anim) = (canvas.clone(), style.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(win) = web_sys::window() {
				if let Some(ref mut c) = *context_anim.borrow_mut() {
					let (scroll_y, scroll_height, viewport) = scroll_state(&win);
					let progress = scroll_progress(scroll_y, scroll_height, viewport);
					c.field.update(&mut c.rng);
					render::render(
						&c.field,
						&ctx,
						&style_anim,
						f64::from(canvas_anim.width()),
						f64::from(canvas_anim.height()),
						progress,
					);
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="starfield-canvas"
			style="position: fixed; top: 0; left: 0; z-index: -1; pointer-events: none;"
		/>
	}
}
