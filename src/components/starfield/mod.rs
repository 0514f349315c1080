//! Scroll-coupled starfield background.
//!
//! A fixed pool of stars falls slowly down a viewport-sized canvas pinned
//! behind the page. How much of the pool is drawn, and how bright, tracks
//! how far the visitor has scrolled: sparse and faint at the top of the
//! page, dense and bright at the bottom. The pool is rebuilt from scratch
//! whenever the viewport resizes.

pub mod field;
mod component;
mod render;

pub use component::StarfieldCanvas;
