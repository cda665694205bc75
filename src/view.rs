/// Bouncing clock screen-saver view.
/// Owns the bounce animator and the did-stop subscription, and paints the
/// current time at the animator's position on every draw.
use std::time::Duration;
use tiny_skia::{Color, Pixmap};
use tracing::{debug, info};

use crate::animation::bounce::{BounceAnimator, Bounds, Point};
use crate::animation::phase::AnimationPhase;
use crate::config;
use crate::diagnostics::DiagnosticLog;
use crate::host::SaverView;
use crate::host::notifications::{DID_STOP, NotificationCenter, Subscription};
use crate::render::clock_face::{self, ClockFace, SystemClock, TimeSource};

const TEXT_COLOR: (u8, u8, u8) = (255, 255, 255);

pub struct BounceClockView {
    bounds: Bounds,
    is_preview: bool,
    animator: BounceAnimator,
    face: ClockFace,
    clock: Box<dyn TimeSource>,
    log: DiagnosticLog,
    /// Released in `destroy`
    did_stop: Option<Subscription>,
    needs_display: bool,
}

impl BounceClockView {
    /// Create the view around an existing did-stop subscription.
    pub fn new(
        frame: Bounds,
        is_preview: bool,
        face: ClockFace,
        log: DiagnosticLog,
        did_stop: Subscription,
    ) -> Self {
        log.log("init");
        info!(
            "Bounce clock view created ({}x{}, preview: {})",
            frame.width, frame.height, is_preview
        );

        Self {
            bounds: frame,
            is_preview,
            animator: BounceAnimator::new(),
            face,
            clock: Box::new(SystemClock),
            log,
            did_stop: Some(did_stop),
            needs_display: false,
        }
    }

    /// Subscribe to the did-stop broadcast on `center` and create the view.
    pub fn attach(
        frame: Bounds,
        is_preview: bool,
        face: ClockFace,
        log: DiagnosticLog,
        center: &NotificationCenter,
    ) -> Self {
        let observer_log = log.clone();
        let did_stop = center.subscribe(DID_STOP, move || {
            observer_log.log(&format!("stopVideo {is_preview}"));
        });
        Self::new(frame, is_preview, face, log, did_stop)
    }

    /// Replace the wall-clock source
    pub fn with_time_source(mut self, clock: impl TimeSource + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn is_preview(&self) -> bool {
        self.is_preview
    }

    pub fn position(&self) -> Point {
        self.animator.position()
    }

    pub fn phase(&self) -> AnimationPhase {
        self.animator.phase()
    }

    /// Paint the frame and return the time string that was drawn
    pub fn render(&mut self, target: &mut Pixmap) -> String {
        target.fill(Color::BLACK);
        debug!("Drawing frame (preview: {})", self.is_preview);

        let text = clock_face::format_time(&self.clock.now());
        self.face
            .draw(target, &text, self.animator.position(), TEXT_COLOR);
        text
    }

    /// Release the did-stop subscription and drop the view
    pub fn destroy(mut self) {
        if let Some(subscription) = self.did_stop.take() {
            subscription.release();
        }
        info!("Bounce clock view destroyed");
    }

    fn update(&mut self) {
        if let Some(phase) = self.animator.advance(self.bounds) {
            debug!("Entered phase {}", phase);
        }
        self.needs_display = true;
    }
}

impl SaverView for BounceClockView {
    fn start(&mut self) {
        self.log.log("startAnimation");
        self.update();
    }

    fn tick(&mut self) {
        self.update();
    }

    fn stop(&mut self) {
        self.log.log("stopAnimation");
    }

    fn draw(&mut self, target: &mut Pixmap) {
        self.render(target);
    }

    fn resize(&mut self, bounds: Bounds) {
        debug!("Resized to {}x{}", bounds.width, bounds.height);
        self.bounds = bounds;
        self.needs_display = true;
    }

    fn frame_interval(&self) -> Duration {
        config::frame_interval()
    }

    fn take_needs_display(&mut self) -> bool {
        std::mem::take(&mut self.needs_display)
    }
}
