//! Page components: the two canvas layers and the interactive sections.

pub mod contact;
pub mod gallery;
pub mod matrix_rain;
pub mod nav;
pub mod reveal;
pub mod starfield;

pub use contact::ContactSection;
pub use gallery::ProjectGallery;
pub use matrix_rain::RainOverlay;
pub use nav::NavBar;
pub use reveal::Reveal;
pub use starfield::StarfieldCanvas;
