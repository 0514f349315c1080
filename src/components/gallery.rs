//! Project gallery with a fullscreen image lightbox.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

use super::reveal::Reveal;
use crate::site::Project;

/// Project cards plus a lightbox overlay. Clicking a card image opens the
/// image fullscreen; clicking the overlay or pressing Escape closes it.
#[component]
pub fn ProjectGallery(#[prop(into)] projects: Vec<Project>) -> impl IntoView {
	let open: RwSignal<Option<usize>> = RwSignal::new(None);
	let images: Vec<String> = projects.iter().map(|p| p.image.clone()).collect();

	let keydown: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
		Rc::new(RefCell::new(None));
	let keydown_init = keydown.clone();

	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		*keydown_init.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			if ev.key() == "Escape" && open.get_untracked().is_some() {
				open.set(None);
			}
		}));
		if let Some(ref cb) = *keydown_init.borrow() {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<section id="projects" class="projects-section">
			<h2>"Projects"</h2>
			<div class="project-grid">
				{projects
					.into_iter()
					.enumerate()
					.map(|(index, project)| {
						view! {
							<Reveal>
								<article class="project-card">
									<img
										src=project.image.clone()
										alt=project.title.clone()
										on:click=move |_| open.set(Some(index))
									/>
									<h3>{project.title.clone()}</h3>
									<p>{project.blurb.clone()}</p>
									<ul class="project-tags">
										{project
											.tags
											.iter()
											.map(|tag| view! { <li>{tag.clone()}</li> })
											.collect_view()}
									</ul>
									{project
										.link
										.clone()
										.map(|link| {
											view! {
												<a class="project-link" href=link>
													"View project"
												</a>
											}
										})}
								</article>
							</Reveal>
						}
					})
					.collect_view()}
			</div>
			{move || {
				open.get()
					.and_then(|index| images.get(index).cloned())
					.map(|src| {
						view! {
							<div class="lightbox" on:click=move |_| open.set(None)>
								<img src=src />
							</div>
						}
					})
			}}
		</section>
	}
}
