//! Decoding of hero and secondary images from disk.
//!
//! The hero must decode or the whole run fails. Secondary images go through
//! a per-file `Result` step: failures are recorded as [`SkippedImage`] and the
//! remaining images keep their listing order.

use crate::error::{CollageError, Result};
use crate::pipeline::InputImage;
use image::{DynamicImage, ImageError, ImageReader};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A secondary file that was dropped from the candidate list.
#[derive(Debug)]
pub struct SkippedImage {
    pub path: PathBuf,
    pub error: CollageError,
}

/// Decoded secondary images in listing order plus the files that were skipped.
#[derive(Debug, Default)]
pub struct LoadedImages {
    pub images: Vec<InputImage>,
    pub skipped: Vec<SkippedImage>,
}

/// Decode an image, guessing the format from its content.
pub fn decode_image(path: &Path) -> std::result::Result<DynamicImage, ImageError> {
    ImageReader::open(path)
        .map_err(ImageError::IoError)?
        .with_guessed_format()
        .map_err(ImageError::IoError)?
        .decode()
}

fn path_key(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Loads the hero image; any failure is fatal.
pub fn load_hero(path: &Path) -> Result<InputImage> {
    let image = decode_image(path).map_err(|source| CollageError::HeroDecode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(InputImage {
        key: path_key(path),
        image,
    })
}

/// Loads one secondary image.
pub fn decode_secondary(path: &Path) -> Result<InputImage> {
    let image = decode_image(path).map_err(|source| CollageError::SecondaryDecode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(InputImage {
        key: path_key(path),
        image,
    })
}

/// True if both paths name the same file. Falls back to a plain comparison
/// when either path cannot be canonicalized.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Loads secondary images, skipping the hero itself and anything that fails to decode.
pub fn load_secondaries(paths: &[PathBuf], hero: &Path) -> LoadedImages {
    load_secondaries_with(paths, hero, |_| {})
}

#[instrument(skip_all, fields(candidates = paths.len()))]
/// Like [`load_secondaries`], calling `on_each` after every attempted file (for progress).
pub fn load_secondaries_with<F>(paths: &[PathBuf], hero: &Path, on_each: F) -> LoadedImages
where
    F: Fn(&Path) + Sync,
{
    let candidates: Vec<&PathBuf> = paths.iter().filter(|p| !same_file(p.as_path(), hero)).collect();

    let decode = |p: &&PathBuf| {
        let r = decode_secondary(p.as_path());
        on_each(p.as_path());
        r
    };
    #[cfg(feature = "parallel")]
    let results: Vec<Result<InputImage>> = candidates.par_iter().map(decode).collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<InputImage>> = candidates.iter().map(decode).collect();

    let mut out = LoadedImages::default();
    for (path, r) in candidates.into_iter().zip(results) {
        match r {
            Ok(img) => out.images.push(img),
            Err(error) => {
                debug!(?path, %error, "skip secondary image");
                out.skipped.push(SkippedImage {
                    path: path.clone(),
                    error,
                });
            }
        }
    }
    out
}
