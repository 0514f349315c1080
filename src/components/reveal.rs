//! Scroll-triggered reveal wrapper.
//!
//! Wraps a block of content in a `div.reveal` and flips on an
//! `is-visible` class the first time the block scrolls into view. The
//! transition itself lives in the host stylesheet; this component only
//! manages the class.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// How much of the element must be on screen before it reveals.
const REVEAL_THRESHOLD: f64 = 0.15;

/// Reveals its children the first time they scroll into view.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
	let node_ref = NodeRef::<leptos::html::Div>::new();
	let callback: Rc<RefCell<Option<ObserverCallback>>> = Rc::new(RefCell::new(None));
	let callback_init = callback.clone();

	Effect::new(move |_| {
		let Some(node) = node_ref.get() else {
			return;
		};

		let cb: ObserverCallback =
			Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
				for entry in entries.iter() {
					let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
						continue;
					};
					if entry.is_intersecting() {
						let target: Element = entry.target();
						let _ = target.class_list().add_1("is-visible");
						// One-shot: once revealed, stop watching.
						observer.unobserve(&target);
					}
				}
			});

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
		let Ok(observer) =
			IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)
		else {
			return;
		};
		observer.observe(&node);

		*callback_init.borrow_mut() = Some(cb);
	});

	view! {
		<div class="reveal" node_ref=node_ref>
			{children()}
		</div>
	}
}
