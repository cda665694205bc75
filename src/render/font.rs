/// Font discovery and loading for the clock face.
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Checked in order when no font path is configured
pub const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} is not a usable TrueType/OpenType font")]
    Invalid(PathBuf),
    #[error("no system font found in {0} known locations")]
    NotFound(usize),
}

pub fn load_font(path: &Path) -> Result<rusttype::Font<'static>, FontError> {
    let data = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let font = rusttype::Font::try_from_vec(data)
        .ok_or_else(|| FontError::Invalid(path.to_path_buf()))?;
    info!("Loaded font from {}", path.display());
    Ok(font)
}

/// First loadable font from [`SYSTEM_FONT_PATHS`]
pub fn find_system_font() -> Result<rusttype::Font<'static>, FontError> {
    for candidate in SYSTEM_FONT_PATHS {
        let path = Path::new(candidate);
        if !path.exists() {
            continue;
        }
        match load_font(path) {
            Ok(font) => return Ok(font),
            Err(e) => debug!("Skipping font candidate: {}", e),
        }
    }
    Err(FontError::NotFound(SYSTEM_FONT_PATHS.len()))
}

/// Explicit path if given, otherwise the system search
pub fn load(explicit: Option<&Path>) -> Result<rusttype::Font<'static>, FontError> {
    match explicit {
        Some(path) => load_font(path),
        None => find_system_font(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_font_is_read_error() {
        let err = load_font(Path::new("/nonexistent/clock.ttf")).unwrap_err();
        assert!(matches!(err, FontError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/clock.ttf"));
    }

    #[test]
    fn test_garbage_font_is_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a font").unwrap();
        let err = load_font(file.path()).unwrap_err();
        assert!(matches!(err, FontError::Invalid(_)));
    }

    #[test]
    fn test_explicit_path_takes_precedence() {
        let err = load(Some(Path::new("/nonexistent/explicit.ttf"))).unwrap_err();
        assert!(matches!(err, FontError::Read { .. }));
    }
}
