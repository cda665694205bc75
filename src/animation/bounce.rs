/// Position state machine for the bouncing clock.
/// Moves a point toward the active phase's target at constant speed and
/// switches phase once the point is inside the arrival box.
use tracing::debug;

use crate::animation::phase::AnimationPhase;
use crate::config::{ARRIVAL_TOLERANCE, SPEED};

/// Point in surface units, origin bottom-left, y up
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Surface size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

pub struct BounceAnimator {
    position: Point,
    phase: AnimationPhase,
    speed: f64,
    tolerance: f64,
}

impl Default for BounceAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl BounceAnimator {
    pub fn new() -> Self {
        Self {
            position: Point::default(),
            phase: AnimationPhase::default(),
            speed: SPEED,
            tolerance: ARRIVAL_TOLERANCE,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Advance one tick against the current bounds.
    /// Returns the new phase when this tick completed a leg.
    pub fn advance(&mut self, bounds: Bounds) -> Option<AnimationPhase> {
        let (start, end) = self.phase.waypoints();
        let start = start.resolve(bounds);
        let target = end.resolve(bounds);
        let dx = target.x - self.position.x;
        let dy = target.y - self.position.y;

        // a collapsed leg has no direction to move in
        let distance = dx.hypot(dy);
        if start != target && distance > 0.0 {
            self.position.x += dx / distance * self.speed;
            self.position.y += dy / distance * self.speed;
        }

        if !self.arrived_on_axis(dx, self.position.x, target.x)
            || !self.arrived_on_axis(dy, self.position.y, target.y)
        {
            return None;
        }

        let from = self.phase;
        self.phase = from.next();
        debug!(
            "Phase {} -> {} at ({:.1}, {:.1})",
            from, self.phase, self.position.x, self.position.y
        );
        Some(self.phase)
    }

    /// Overshooting counts as arrived, so the check depends on which way
    /// the axis was moving. A still axis is always arrived.
    fn arrived_on_axis(&self, delta: f64, current: f64, target: f64) -> bool {
        if delta > 0.0 {
            current >= target - self.tolerance
        } else if delta < 0.0 {
            current <= target + self.tolerance
        } else {
            true
        }
    }

    #[cfg(test)]
    fn at(position: Point, phase: AnimationPhase) -> Self {
        Self {
            position,
            phase,
            ..Self::new()
        }
    }
}
