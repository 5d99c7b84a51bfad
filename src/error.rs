use std::fmt;
use std::io;

/// Error type for atlas configuration, slicing and layout loading.
#[derive(Debug)]
pub enum AtlasError {
    /// Grid width and height must both be greater than zero
    InvalidGridSize {
        /// Configured horizontal cell count
        width: f64,
        /// Configured vertical cell count
        height: f64,
    },
    /// No regions were defined in the atlas options
    NoRegions,
    /// A named source image was not found in the content registry
    MissingImage(String),
    /// An output surface with the resolved dimensions could not be created
    Surface {
        /// Resolved width in pixels
        width: i32,
        /// Resolved height in pixels
        height: i32,
    },
    /// File I/O error while reading a layout file
    Io(io::Error),
    /// JSON parse error in a layout file
    Parse(serde_json::Error),
    /// Unsupported layout file format (non-JSON)
    UnsupportedFormat(String),
}

impl From<io::Error> for AtlasError {
    fn from(err: io::Error) -> Self {
        AtlasError::Io(err)
    }
}

impl From<serde_json::Error> for AtlasError {
    fn from(err: serde_json::Error) -> Self {
        AtlasError::Parse(err)
    }
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtlasError::InvalidGridSize { width, height } => write!(
                f,
                "Grid width and height must be greater than 0 (got {}x{})",
                width, height
            ),
            AtlasError::NoRegions => write!(f, "No regions defined"),
            AtlasError::MissingImage(name) => write!(f, "Image '{}' not found", name),
            AtlasError::Surface { width, height } => {
                write!(f, "Cannot create a {}x{} output surface", width, height)
            }
            AtlasError::Io(err) => write!(f, "I/O error: {}", err),
            AtlasError::Parse(err) => write!(f, "JSON parse error: {}", err),
            AtlasError::UnsupportedFormat(path) => {
                write!(f, "Unsupported layout file format: {}", path)
            }
        }
    }
}

impl std::error::Error for AtlasError {}
