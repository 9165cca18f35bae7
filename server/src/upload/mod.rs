//! Upload subsystem. Category façades, local persistence, WebP recompression,
//! and the legacy media-host offload.

pub mod category;
pub mod handler;
pub mod image;
pub mod naming;
pub mod remote;
pub mod store;

use serde::Serialize;
use std::path::Path;

pub use category::Category;
pub use store::{delete_file, ensure_dir};

/// One incoming file, held in memory for the duration of the request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
	pub file_name: Option<Box<str>>,
	pub data: Vec<u8>,
}

/// Aggregate result of a batch upload.
///
/// `saved` is true iff at least one file was stored; a batch with some bad
/// files still reports the good ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadOutcome {
	pub saved: bool,
	pub paths: Vec<Box<str>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<Box<str>>,
}

/// Upload façade bound to a static-assets base directory.
///
/// Image uploads land under `base_dir/<subfolder>`; the other categories
/// write to a caller-supplied directory.
#[derive(Debug)]
pub struct Uploader {
	base_dir: Box<Path>,
}

impl Uploader {
	pub fn new(base_dir: impl Into<Box<Path>>) -> Self {
		Self { base_dir: base_dir.into() }
	}

	pub fn base_dir(&self) -> &Path {
		&self.base_dir
	}

	/// Stores image files under `base_dir/<subfolder>` (default "images"),
	/// optionally recompressing each stored image to WebP.
	pub async fn upload_images(
		&self,
		files: &[UploadedFile],
		subfolder: Option<&str>,
		recompress: bool,
	) -> UploadOutcome {
		let dir = self.base_dir.join(subfolder.unwrap_or("images"));
		store::process_batch(files, &dir, Category::Image, recompress).await
	}

	pub async fn upload_videos(&self, files: &[UploadedFile], dir: impl AsRef<Path>) -> UploadOutcome {
		store::process_batch(files, dir.as_ref(), Category::Video, false).await
	}

	pub async fn upload_audios(&self, files: &[UploadedFile], dir: impl AsRef<Path>) -> UploadOutcome {
		store::process_batch(files, dir.as_ref(), Category::Audio, false).await
	}

	pub async fn upload_docs(&self, files: &[UploadedFile], dir: impl AsRef<Path>) -> UploadOutcome {
		store::process_batch(files, dir.as_ref(), Category::Document, false).await
	}

	pub async fn upload_any(&self, files: &[UploadedFile], dir: impl AsRef<Path>) -> UploadOutcome {
		store::process_batch(files, dir.as_ref(), Category::Any, false).await
	}
}

// vim: ts=4
