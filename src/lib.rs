//! tickpick
//!
//! Terminal picker for a value between 1 and 60 that snaps to decades.
//! Dragging or flicking the tick strip and releasing resolves to the next
//! multiple of ten in the direction of travel.
//!
//! The picker core (`model`, `state`) is pure and driven through the
//! [`engine::ScrollEngine`] seam; `view` is the impure terminal shell.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;
