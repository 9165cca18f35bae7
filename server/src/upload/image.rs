//! WebP recompression for stored images.

use image::DynamicImage;
use std::path::{Path, PathBuf};

use crate::prelude::*;

pub const DEFAULT_QUALITY: f32 = 60.0;

// Sync recompressor, runs on a blocking thread
fn recompress_webp_sync(path: &Path, quality: f32) -> ClResult<PathBuf> {
	let original = image::open(path).map_err(|err| Error::Internal(format!("decode failed: {}", err)))?;

	// The lossy WebP encoder takes RGB8/RGBA8 only; alpha, luma-alpha and
	// paletted sources are flattened to plain RGB first
	let original = match original {
		DynamicImage::ImageRgb8(_) => original,
		_ => DynamicImage::ImageRgb8(original.to_rgb8()),
	};

	let encoder = webp::Encoder::from_image(&original)
		.map_err(|err| Error::Internal(format!("encode failed: {}", err)))?;
	let encoded = encoder.encode(quality);

	let webp_path = path.with_extension("webp");
	std::fs::write(&webp_path, &*encoded)?;
	std::fs::remove_file(path)?;

	Ok(webp_path)
}

/// Recompresses a stored image to WebP at the given quality, deleting the
/// original after a successful write.
///
/// On any failure (corrupt image, disk error) the error is logged and the
/// original path is returned with the source file left in place.
pub async fn recompress_webp(path: PathBuf, quality: f32) -> PathBuf {
	let res = tokio::task::spawn_blocking({
		let path = path.clone();
		move || recompress_webp_sync(&path, quality)
	})
	.await;

	match res {
		Ok(Ok(webp_path)) => webp_path,
		Ok(Err(err)) => {
			warn!("Error converting {:?} to WebP: {}", path, err);
			path
		}
		Err(err) => {
			warn!("Error converting {:?} to WebP: {}", path, err);
			path
		}
	}
}

// vim: ts=4
