use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameFormatError {
    #[error("unknown image format for {path:?}, use .jpg or .ppm or pass --format")]
    UnknownExtension { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FrameFormat {
    #[default]
    Jpeg,
    Ppm,
}

impl FrameFormat {
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Ppm => "ppm",
        }
    }

    /// Picks the format from the file extension (`.jpg`, `.jpeg`, `.ppm`, `.pnm`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FrameFormatError> {
        let path = path.as_ref();

        match image::ImageFormat::from_path(path) {
            Ok(image::ImageFormat::Jpeg) => Ok(Self::Jpeg),
            Ok(image::ImageFormat::Pnm) => Ok(Self::Ppm),
            _ => Err(FrameFormatError::UnknownExtension {
                path: path.to_path_buf(),
            }),
        }
    }

    #[must_use]
    pub fn image_format(&self) -> image::ImageFormat {
        match self {
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Ppm => image::ImageFormat::Pnm,
        }
    }
}

impl fmt::Display for FrameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jpeg => write!(f, "jpeg"),
            Self::Ppm => write!(f, "ppm"),
        }
    }
}
