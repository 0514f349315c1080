//! Fixed navigation bar with smooth scrolling to page sections.

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Section anchors, in page order. Ids are the contract with the section
/// components below.
const SECTIONS: [(&str, &str); 3] = [
	("about", "About"),
	("projects", "Projects"),
	("contact", "Contact"),
];

/// Smooth-scroll the section with the given id into view. Unknown ids are
/// ignored.
fn scroll_to(id: &str) {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};
	let Some(section) = document.get_element_by_id(id) else {
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	section.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Top navigation bar.
#[component]
pub fn NavBar(#[prop(into)] brand: String) -> impl IntoView {
	view! {
		<nav class="site-nav">
			<a
				class="site-nav-brand"
				href="#"
				on:click=|ev| {
					ev.prevent_default();
					if let Some(window) = web_sys::window() {
						window.scroll_to_with_x_and_y(0.0, 0.0);
					}
				}
			>
				{brand}
			</a>
			<ul class="site-nav-links">
				{SECTIONS
					.iter()
					.map(|&(id, label)| {
						view! {
							<li>
								<a
									href=format!("#{id}")
									on:click=move |ev| {
										ev.prevent_default();
										scroll_to(id);
									}
								>
									{label}
								</a>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</nav>
	}
}
