use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use bounce_clock::animation::bounce::Bounds;
use bounce_clock::config::{self, PreviewConfig};
use bounce_clock::diagnostics::DiagnosticLog;
use bounce_clock::host::notifications::{DID_STOP, NotificationCenter};
use bounce_clock::host::preview::PreviewHost;
use bounce_clock::render::clock_face::ClockFace;
use bounce_clock::render::font;
use bounce_clock::view::BounceClockView;

#[derive(Parser, Debug)]
#[command(name = "bounce-clock", about = "Headless host for the bouncing clock screen saver")]
struct Args {
    /// Surface width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Run as a preview (thumbnail) instance
    #[arg(long)]
    preview: bool,

    /// Output mode: png, raw, none
    #[arg(long, default_value = "png")]
    output: String,

    /// Output file path (for png mode)
    #[arg(long, default_value = "output.png")]
    output_path: String,

    /// Stop after this many frames (0 = until Ctrl-C)
    #[arg(long, default_value_t = 0)]
    frames: u64,

    /// TrueType font to render the clock with (default: search system fonts)
    #[arg(long)]
    font: Option<String>,

    /// Diagnostic log file (default: log.txt in the Downloads directory)
    #[arg(long)]
    log_file: Option<String>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!(
        "bounce-clock v{} starting ({}x{})",
        env!("CARGO_PKG_VERSION"),
        args.width,
        args.height
    );

    let config = PreviewConfig {
        width: args.width,
        height: args.height,
        is_preview: args.preview,
        output_mode: args.output.parse().unwrap_or_default(),
        output_path: args.output_path.into(),
        max_frames: args.frames,
        font_path: args.font.map(Into::into),
        log_path: args.log_file.map(Into::into),
    };

    let log = match &config.log_path {
        Some(path) => DiagnosticLog::new(Some(path.clone())),
        None => DiagnosticLog::in_downloads(),
    };

    let font = match font::load(config.font_path.as_deref()) {
        Ok(font) => Some(font),
        Err(e) => {
            warn!("Rendering without text: {}", e);
            None
        }
    };

    let center = NotificationCenter::new();
    let view = BounceClockView::attach(
        Bounds::new(config.width as f64, config.height as f64),
        config.is_preview,
        ClockFace::new(font, config::FONT_SIZE),
        log,
        &center,
    );

    let mut host = PreviewHost::new(config, view)?;
    let frames = host.run().await?;

    center.post(DID_STOP);
    host.into_view().destroy();

    info!("bounce-clock shutdown after {} frames", frames);
    Ok(())
}
