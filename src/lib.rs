//! starfall: animated front-end for a static portfolio page.
//!
//! This crate provides the page's client-side behavior as a WASM app:
//! a scroll-coupled canvas starfield behind the content, scroll-reveal
//! sections, a project lightbox, smooth-scroll navigation, a contact-form
//! toast, and a keystroke-triggered glyph-rain easter egg.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlScriptElement, KeyboardEvent, Window};

pub mod components;
pub mod konami;
pub mod rng;
pub mod site;
pub mod theme;

pub use components::{ContactSection, NavBar, ProjectGallery, RainOverlay, Reveal, StarfieldCanvas};
pub use site::{Project, SiteConfig};

use konami::SequenceDetector;
use theme::RainStyle;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starfall: logging initialized");
}

/// Load page content from a script element with id="site-config".
/// Expected format: JSON with { name, tagline, about, projects, email }
fn load_site_config() -> Option<SiteConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SiteConfig>(&json_text) {
		Ok(config) => {
			info!(
				"starfall: loaded site config, {} projects",
				config.projects.len()
			);
			Some(config)
		}
		Err(e) => {
			warn!("starfall: failed to parse site config: {}", e);
			None
		}
	}
}

/// Listen for the easter-egg keystroke sequence and toggle the rain
/// overlay when it completes. The listener runs for the life of the page;
/// the overlay handle lives in the slot between toggles.
fn wire_easter_egg() {
	let detector = Rc::new(RefCell::new(SequenceDetector::new()));
	let overlay: Rc<RefCell<Option<RainOverlay>>> = Rc::new(RefCell::new(None));
	let keydown: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
		Rc::new(RefCell::new(None));
	let keydown_init = keydown.clone();

	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let (detector, overlay) = (detector.clone(), overlay.clone());
		*keydown_init.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			if detector.borrow_mut().push(&ev.key()) {
				let mut slot = overlay.borrow_mut();
				match slot.take() {
					Some(running) => running.stop(),
					None => *slot = RainOverlay::start(&RainStyle::default()),
				}
			}
		}));
		if let Some(ref cb) = *keydown_init.borrow() {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}
	});
}

/// Main application component.
/// Loads page content from the DOM and renders the portfolio sections on
/// top of the starfield layer.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_site_config().unwrap_or_default();
	let title = if config.name.is_empty() {
		"Portfolio".to_string()
	} else {
		config.name.clone()
	};

	wire_easter_egg();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<StarfieldCanvas />
		<NavBar brand=config.name.clone() />
		<main class="page">
			<header class="hero">
				<h1>{config.name.clone()}</h1>
				<p class="hero-tagline">{config.tagline.clone()}</p>
			</header>
			<section id="about" class="about-section">
				<Reveal>
					<h2>"About"</h2>
					{config
						.about
						.iter()
						.map(|paragraph| view! { <p>{paragraph.clone()}</p> })
						.collect_view()}
				</Reveal>
			</section>
			<ProjectGallery projects=config.projects.clone() />
			<ContactSection email=config.email.clone() />
		</main>
	}
}
