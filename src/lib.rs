//! Bouncing wall-clock screen saver.
//!
//! [`view::BounceClockView`] renders the current time as text that travels
//! between the bottom-left, top-center and bottom-right of the surface. A host
//! drives it through the [`host::SaverView`] trait.

pub mod animation;
pub mod config;
pub mod diagnostics;
pub mod host;
pub mod render;
pub mod view;
