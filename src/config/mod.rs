use std::path::PathBuf;
use std::time::Duration;

/// Step length per tick, in surface units
pub const SPEED: f64 = 2.0;

/// Half-size of the arrival box around a waypoint
pub const ARRIVAL_TOLERANCE: f64 = 5.0;

/// Assumed width of the rendered time string. Not measured.
pub const TEXT_WIDTH: f64 = 250.0;

/// Assumed distance from the top edge to the top waypoint. Not measured.
pub const TEXT_HEIGHT_OFFSET: f64 = 60.0;

/// Clock font size in pixels
pub const FONT_SIZE: f32 = 60.0;

/// Animation frame rate the host timer should drive
pub const FRAMES_PER_SECOND: u32 = 60;

pub fn frame_interval() -> Duration {
    Duration::from_secs_f64(1.0 / FRAMES_PER_SECOND as f64)
}

/// Configuration of the headless preview host
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    pub width: u32,
    pub height: u32,
    pub is_preview: bool,
    pub output_mode: OutputMode,
    pub output_path: PathBuf,
    /// Stop after this many ticks (0 = run until Ctrl-C)
    pub max_frames: u64,
    pub font_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum OutputMode {
    /// Save a PNG snapshot every few seconds
    #[default]
    Png,
    /// Output raw RGBA frames to stdout (for piping)
    Raw,
    /// Render only, discard frames
    None,
}

impl std::str::FromStr for OutputMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(OutputMode::Png),
            "raw" | "stdout" => Ok(OutputMode::Raw),
            "none" | "null" => Ok(OutputMode::None),
            _ => Err(format!("Unknown output mode: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_from_str() {
        assert_eq!("PNG".parse::<OutputMode>(), Ok(OutputMode::Png));
        assert_eq!("stdout".parse::<OutputMode>(), Ok(OutputMode::Raw));
        assert_eq!("none".parse::<OutputMode>(), Ok(OutputMode::None));
        assert!("framebuffer".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_frame_interval_is_sixtieth_of_second() {
        let interval = frame_interval();
        assert!(interval > Duration::from_millis(16));
        assert!(interval < Duration::from_millis(17));
    }
}
