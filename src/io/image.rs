//! PNG and PPM export of canvases and preview frames

use crate::color::Color;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::canvas::Canvas;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageFormat, Rgb, RgbImage};
use ndarray::Array2;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encoded file format for exported images
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Portable Network Graphics
    #[default]
    Png,
    /// Binary portable pixmap (P6)
    Ppm,
}

impl OutputFormat {
    /// File extension without the dot
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Ppm => "ppm",
        }
    }

    /// Guess the format from a path's extension, defaulting to PNG
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ppm") => Self::Ppm,
            _ => Self::Png,
        }
    }
}

/// Convert a `[y, x]` color array into an RGB image
pub fn pixels_to_rgb(pixels: &Array2<Color>) -> RgbImage {
    let (rows, cols) = pixels.dim();
    let mut img = RgbImage::new(cols as u32, rows as u32);
    for ((y, x), color) in pixels.indexed_iter() {
        img.put_pixel(x as u32, y as u32, Rgb(color.to_rgb()));
    }
    img
}

/// Convert a canvas into an RGB image; empty cells show the sentinel color
pub fn canvas_to_rgb(canvas: &Canvas) -> RgbImage {
    pixels_to_rgb(canvas.as_array())
}

/// Save a color array, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_pixels(pixels: &Array2<Color>, path: &Path, format: OutputFormat) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let img = pixels_to_rgb(pixels);
    match format {
        OutputFormat::Png => img.save_with_format(path, ImageFormat::Png).map_err(|e| {
            AlgorithmError::ImageExport {
                path: path.to_path_buf(),
                source: e,
            }
        }),
        OutputFormat::Ppm => write_ppm(&img, path),
    }
}

/// Write a binary P6 pixmap
///
/// The generic PNM path of `image` picks PAM for RGB buffers, so the
/// subtype is fixed explicitly.
fn write_ppm(img: &RgbImage, path: &Path) -> Result<()> {
    let file_error = |operation: &'static str| {
        move |e: std::io::Error| AlgorithmError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source: e,
        }
    };

    let mut writer = BufWriter::new(File::create(path).map_err(file_error("create file"))?);
    PnmEncoder::new(&mut writer)
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| AlgorithmError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;
    writer.flush().map_err(file_error("flush file"))
}

/// Save the canvas in the format implied by the path's extension
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the image cannot be written
pub fn export_canvas(canvas: &Canvas, path: &Path) -> Result<()> {
    export_pixels(canvas.as_array(), path, OutputFormat::from_path(path))
}
