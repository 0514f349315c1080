//! Glyph-rain easter egg.
//!
//! A structurally independent sibling of the starfield: its own overlay
//! canvas, its own fixed-step timer, its own RNG stream. Triggered by the
//! keystroke sequence detector in the app shell; shares no state with the
//! background animation.

pub mod columns;
mod overlay;

pub use overlay::RainOverlay;
