//! Page content data model, loaded from a JSON script element in the host
//! document.

use serde::Deserialize;

/// A portfolio project card.
#[derive(Clone, Debug, Deserialize)]
pub struct Project {
	/// Display title.
	pub title: String,
	/// One-or-two sentence description shown on the card.
	pub blurb: String,
	/// Image URL; also what the lightbox opens.
	pub image: String,
	/// Optional external link (repository, live demo).
	pub link: Option<String>,
	/// Short tags rendered as chips.
	#[serde(default)]
	pub tags: Vec<String>,
}

/// Complete page content: identity, copy, and the project list.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SiteConfig {
	pub name: String,
	pub tagline: String,
	/// About-section paragraphs.
	#[serde(default)]
	pub about: Vec<String>,
	#[serde(default)]
	pub projects: Vec<Project>,
	/// Contact address shown under the form.
	#[serde(default)]
	pub email: String,
}
