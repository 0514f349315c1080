//! Contact section: a form whose submission is swallowed client-side and
//! acknowledged with a transient toast.
//!
//! There is no backend; the page is static. Submitting resets the form
//! and shows the toast for a few seconds. Submitting again restarts the
//! visible period.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlFormElement, SubmitEvent};

use super::reveal::Reveal;

/// How long the toast stays up, in milliseconds.
const TOAST_MS: i32 = 4000;

/// Hide the toast after [`TOAST_MS`], cancelling any earlier timer so a
/// repeat submission restarts the full visible period.
fn hide_later(visible: RwSignal<bool>, pending: StoredValue<Option<i32>>) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(id) = pending.get_value() {
		window.clear_timeout_with_handle(id);
	}
	// One-shot callback; ownership moves to the JS side and is reclaimed
	// after it fires.
	let cb = Closure::once_into_js(move || visible.set(false));
	let id = window
		.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), TOAST_MS)
		.ok();
	pending.set_value(id);
}

/// Contact form with success toast.
#[component]
pub fn ContactSection(#[prop(into)] email: String) -> impl IntoView {
	let toast_visible = RwSignal::new(false);
	let pending_hide: StoredValue<Option<i32>> = StoredValue::new(None);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if let Some(form) = ev
			.target()
			.and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
		{
			form.reset();
		}
		toast_visible.set(true);
		hide_later(toast_visible, pending_hide);
	};

	view! {
		<section id="contact" class="contact-section">
			<Reveal>
				<h2>"Get in touch"</h2>
				<form class="contact-form" on:submit=on_submit>
					<input type="text" name="name" placeholder="Your name" required />
					<input type="email" name="email" placeholder="Your email" required />
					<textarea name="message" placeholder="Your message" required></textarea>
					<button type="submit">"Send"</button>
				</form>
				<p class="contact-email">{email}</p>
			</Reveal>
			<div
				class="toast"
				class:toast-visible=move || toast_visible.get()
			>
				"Thanks! Your message is on its way."
			</div>
		</section>
	}
}
