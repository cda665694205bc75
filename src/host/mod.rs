/// Host-side contract of a screen-saver view and the pieces a host uses to
/// drive one: the broadcast notification registry and a headless preview loop.
pub mod notifications;
pub mod preview;

use std::time::Duration;
use tiny_skia::Pixmap;

use crate::animation::bounce::Bounds;

/// Capabilities a screen-saver host needs from a view: lifecycle, ticking
/// and drawing. Construction and teardown stay with the concrete type.
pub trait SaverView {
    /// Animation began
    fn start(&mut self);

    /// One timer callback
    fn tick(&mut self);

    /// Animation ended
    fn stop(&mut self);

    /// Paint the current frame synchronously. The pixmap covers the bounds.
    fn draw(&mut self, target: &mut Pixmap);

    fn resize(&mut self, bounds: Bounds);

    /// How often the host should call [`SaverView::tick`]
    fn frame_interval(&self) -> Duration;

    /// Whether a redraw was requested since the last call
    fn take_needs_display(&mut self) -> bool;
}
