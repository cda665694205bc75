/// Bounce animation phases and their fixed waypoint table.
use crate::animation::bounce::{Bounds, Point};
use crate::config::{TEXT_HEIGHT_OFFSET, TEXT_WIDTH};

/// Named target positions of the bounce cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waypoint {
    BottomLeft,
    TopCenter,
    BottomRight,
}

impl Waypoint {
    /// Resolve against the current surface bounds. Never cached, so a
    /// resize is picked up on the next tick.
    pub fn resolve(self, bounds: Bounds) -> Point {
        match self {
            Waypoint::BottomLeft => Point::new(0.0, 0.0),
            Waypoint::TopCenter => Point::new(
                (bounds.width - TEXT_WIDTH) / 2.0,
                bounds.height - TEXT_HEIGHT_OFFSET,
            ),
            Waypoint::BottomRight => Point::new(bounds.width - TEXT_WIDTH, 0.0),
        }
    }
}

/// One leg of the four-leg diagonal bounce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    #[default]
    BottomLeftToTopCenter,
    TopCenterToBottomRight,
    BottomRightToTopCenter,
    TopCenterToBottomLeft,
}

impl AnimationPhase {
    pub const CYCLE: [AnimationPhase; 4] = [
        AnimationPhase::BottomLeftToTopCenter,
        AnimationPhase::TopCenterToBottomRight,
        AnimationPhase::BottomRightToTopCenter,
        AnimationPhase::TopCenterToBottomLeft,
    ];

    /// (start, end) waypoints of this leg
    pub fn waypoints(self) -> (Waypoint, Waypoint) {
        match self {
            AnimationPhase::BottomLeftToTopCenter => (Waypoint::BottomLeft, Waypoint::TopCenter),
            AnimationPhase::TopCenterToBottomRight => (Waypoint::TopCenter, Waypoint::BottomRight),
            AnimationPhase::BottomRightToTopCenter => (Waypoint::BottomRight, Waypoint::TopCenter),
            AnimationPhase::TopCenterToBottomLeft => (Waypoint::TopCenter, Waypoint::BottomLeft),
        }
    }

    pub fn target(self) -> Waypoint {
        self.waypoints().1
    }

    pub fn next(self) -> Self {
        match self {
            AnimationPhase::BottomLeftToTopCenter => AnimationPhase::TopCenterToBottomRight,
            AnimationPhase::TopCenterToBottomRight => AnimationPhase::BottomRightToTopCenter,
            AnimationPhase::BottomRightToTopCenter => AnimationPhase::TopCenterToBottomLeft,
            AnimationPhase::TopCenterToBottomLeft => AnimationPhase::BottomLeftToTopCenter,
        }
    }
}

impl std::fmt::Display for AnimationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AnimationPhase::BottomLeftToTopCenter => "bottomLeftToTopCenter",
            AnimationPhase::TopCenterToBottomRight => "topCenterToBottomRight",
            AnimationPhase::BottomRightToTopCenter => "bottomRightToTopCenter",
            AnimationPhase::TopCenterToBottomLeft => "topCenterToBottomLeft",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waypoints_for_800x600() {
        let bounds = Bounds::new(800.0, 600.0);
        assert_eq!(Waypoint::BottomLeft.resolve(bounds), Point::new(0.0, 0.0));
        assert_eq!(Waypoint::TopCenter.resolve(bounds), Point::new(275.0, 540.0));
        assert_eq!(Waypoint::BottomRight.resolve(bounds), Point::new(550.0, 0.0));
    }

    #[test]
    fn test_waypoints_follow_bounds() {
        let bounds = Bounds::new(1920.0, 1080.0);
        assert_eq!(Waypoint::TopCenter.resolve(bounds), Point::new(835.0, 1020.0));
        assert_eq!(Waypoint::BottomRight.resolve(bounds), Point::new(1670.0, 0.0));
    }

    #[test]
    fn test_next_walks_the_cycle() {
        for (i, phase) in AnimationPhase::CYCLE.iter().enumerate() {
            assert_eq!(phase.next(), AnimationPhase::CYCLE[(i + 1) % 4]);
        }
    }

    #[test]
    fn test_legs_are_connected() {
        // each leg starts where the previous one ended
        for phase in AnimationPhase::CYCLE {
            assert_eq!(phase.target(), phase.next().waypoints().0);
        }
    }

    #[test]
    fn test_initial_phase() {
        assert_eq!(AnimationPhase::default(), AnimationPhase::BottomLeftToTopCenter);
        assert_eq!(AnimationPhase::default().to_string(), "bottomLeftToTopCenter");
    }
}
