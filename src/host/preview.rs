/// Headless preview host standing in for the screen-saver runtime.
/// Drives a view's timer, draws on request, and writes frames out.
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tokio::time;
use tracing::{debug, info};

use crate::config::{OutputMode, PreviewConfig};
use crate::host::SaverView;

/// Seconds between PNG snapshots
const SNAPSHOT_EVERY_SECS: u64 = 5;

pub struct PreviewHost<V: SaverView> {
    config: PreviewConfig,
    view: V,
    canvas: tiny_skia::Pixmap,
    frames_drawn: u64,
}

impl<V: SaverView> PreviewHost<V> {
    pub fn new(config: PreviewConfig, view: V) -> Result<Self> {
        let canvas = tiny_skia::Pixmap::new(config.width, config.height)
            .with_context(|| format!("Invalid surface size {}x{}", config.width, config.height))?;
        Ok(Self {
            config,
            view,
            canvas,
            frames_drawn: 0,
        })
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Hand the view back for teardown
    pub fn into_view(self) -> V {
        self.view
    }

    /// Run until Ctrl-C or `max_frames` ticks. Returns the tick count.
    pub async fn run(&mut self) -> Result<u64> {
        let frame_duration = self.view.frame_interval();
        let mut interval = time::interval(frame_duration);
        let mut ticks: u64 = 0;

        info!(
            "Starting preview loop: {}x{} every {:?}, output: {:?}",
            self.config.width, self.config.height, frame_duration, self.config.output_mode
        );

        self.view.start();
        self.present()?;

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.view.tick();
                    self.present()?;
                    ticks += 1;

                    if self.config.max_frames > 0 && ticks >= self.config.max_frames {
                        info!("Reached {} frames", ticks);
                        break;
                    }
                }
                _ = &mut ctrl_c => {
                    info!("Interrupted after {} frames", ticks);
                    break;
                }
            }
        }

        self.view.stop();
        Ok(ticks)
    }

    /// Draw if the view asked for it, then write the frame out
    fn present(&mut self) -> Result<()> {
        if !self.view.take_needs_display() {
            return Ok(());
        }
        self.view.draw(&mut self.canvas);

        match self.config.output_mode {
            OutputMode::Png => {
                let fps = (1.0 / self.view.frame_interval().as_secs_f64()).round() as u64;
                if self.frames_drawn % (fps.max(1) * SNAPSHOT_EVERY_SECS) == 0 {
                    let output_path = self.config.output_path.clone();
                    save_png(&self.canvas, &output_path).context("Failed to save PNG output")?;
                    debug!("Saved frame {} to {}", self.frames_drawn, output_path.display());
                }
            }
            OutputMode::Raw => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(self.canvas.data())
                    .context("Failed to write raw frame")?;
            }
            OutputMode::None => {}
        }

        self.frames_drawn += 1;
        Ok(())
    }
}

fn save_png(canvas: &tiny_skia::Pixmap, path: &Path) -> Result<()> {
    canvas
        .save_png(path)
        .map_err(|e| anyhow::anyhow!("Failed to save PNG: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::animation::bounce::Bounds;
    use tiny_skia::{Color, Pixmap};

    #[derive(Default)]
    struct CountingView {
        starts: u32,
        ticks: u32,
        stops: u32,
        draws: u32,
        dirty: bool,
    }

    impl SaverView for CountingView {
        fn start(&mut self) {
            self.starts += 1;
            self.dirty = true;
        }
        fn tick(&mut self) {
            self.ticks += 1;
            // redraw every other tick
            self.dirty = self.ticks % 2 == 0;
        }
        fn stop(&mut self) {
            self.stops += 1;
        }
        fn draw(&mut self, target: &mut Pixmap) {
            self.draws += 1;
            target.fill(Color::WHITE);
        }
        fn resize(&mut self, _bounds: Bounds) {}
        fn frame_interval(&self) -> Duration {
            Duration::from_millis(1)
        }
        fn take_needs_display(&mut self) -> bool {
            std::mem::take(&mut self.dirty)
        }
    }

    fn config(output_mode: OutputMode, output_path: &Path, max_frames: u64) -> PreviewConfig {
        PreviewConfig {
            width: 32,
            height: 16,
            is_preview: true,
            output_mode,
            output_path: output_path.to_path_buf(),
            max_frames,
            font_path: None,
            log_path: None,
        }
    }

    #[tokio::test]
    async fn test_runs_lifecycle_and_draws_on_request() {
        let cfg = config(OutputMode::None, Path::new("unused.png"), 6);
        let mut host = PreviewHost::new(cfg, CountingView::default()).unwrap();

        let ticks = host.run().await.unwrap();

        assert_eq!(ticks, 6);
        let view = host.view();
        assert_eq!((view.starts, view.ticks, view.stops), (1, 6, 1));
        // start + ticks 2, 4, 6
        assert_eq!(view.draws, 4);
        assert_eq!(host.frames_drawn(), 4);
    }

    #[tokio::test]
    async fn test_png_snapshot_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let cfg = config(OutputMode::Png, &path, 1);
        let mut host = PreviewHost::new(cfg, CountingView::default()).unwrap();

        host.run().await.unwrap();

        let saved = Pixmap::load_png(&path).unwrap();
        assert_eq!((saved.width(), saved.height()), (32, 16));
        assert!(saved.data().chunks_exact(4).all(|p| p == [255, 255, 255, 255]));
    }

    #[test]
    fn test_rejects_empty_surface() {
        let cfg = config(OutputMode::None, Path::new("unused.png"), 1);
        let cfg = PreviewConfig { width: 0, ..cfg };
        assert!(PreviewHost::new(cfg, CountingView::default()).is_err());
    }
}
