//! Header-only image dimension extraction

use image::ImageReader;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Width, height and sniffed format of one image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
    pub format: String,
}

/// Why dimensions could not be read from a file
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file could not be opened or its header bytes could not be read
    #[error("open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The header bytes match no supported format
    #[error("{path}: unknown image format")]
    UnknownFormat { path: PathBuf },

    /// The format was recognized but its header is corrupt or truncated
    #[error("{path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ExtractError {
    /// True for failures raised before any format sniffing happened
    pub fn is_io(&self) -> bool {
        matches!(self, ExtractError::Open { .. })
    }
}

/// Read the dimensions of the image at `path` without decoding pixel data
///
/// The format is sniffed from the leading bytes, so the file extension is
/// irrelevant. The reader owns the file handle and is consumed by
/// `into_dimensions`, so the file is closed on every return path.
///
/// # Arguments
/// * `path` - Path to the image file
///
/// # Returns
/// The image's dimensions, or an `ExtractError` separating I/O from format failures
pub fn extract_dimensions(path: &Path) -> Result<ImageDimensions, ExtractError> {
    let open_err = |source: io::Error| ExtractError::Open {
        path: path.to_path_buf(),
        source,
    };

    // Built without a path so the extension never supplies a fallback format
    let file = File::open(path).map_err(open_err)?;
    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(open_err)?;

    let format = match reader.format() {
        Some(format) => format_name(format),
        None => {
            return Err(ExtractError::UnknownFormat {
                path: path.to_path_buf(),
            })
        }
    };

    // A header cut short surfaces as an I/O error from the decoder; it is still a corrupt image
    let (width, height) = reader
        .into_dimensions()
        .map_err(|source| ExtractError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(ImageDimensions {
        width,
        height,
        format,
    })
}

fn format_name(format: image::ImageFormat) -> String {
    format!("{:?}", format).to_lowercase()
}
