//! Local persistence: directory handling, single-file writes, batch processing.

use std::path::Path;
use tokio::fs;

use crate::prelude::*;
use crate::upload::{category::Category, image, naming, UploadOutcome, UploadedFile};

/// Creates `path` and all missing ancestors. Succeeds if the directory
/// already exists; filesystem errors are logged and reported as `false`.
pub async fn ensure_dir(path: &Path) -> bool {
	match fs::create_dir_all(path).await {
		Ok(()) => true,
		Err(err) => {
			warn!("Error creating directory {:?}: {}", path, err);
			false
		}
	}
}

/// Removes `dir/file_name` if present. Returns `false` when the file does not
/// exist or removal fails.
pub async fn delete_file(dir: &Path, file_name: &str) -> bool {
	let path = dir.join(file_name);
	if fs::metadata(&path).await.is_err() {
		return false;
	}
	match fs::remove_file(&path).await {
		Ok(()) => true,
		Err(err) => {
			warn!("Error deleting file {:?}: {}", path, err);
			false
		}
	}
}

/// Persists a single upload into `dir` under a freshly generated name.
///
/// Returns the stored file's relative path (forward slashes), or `None` when
/// the file is empty, has no usable filename, carries a disallowed extension,
/// or the write fails. Failures are logged, never propagated.
pub(crate) async fn persist_file(
	file: &UploadedFile,
	dir: &Path,
	category: Category,
	recompress: bool,
) -> Option<Box<str>> {
	let original_name = file.file_name.as_deref()?;
	if original_name.is_empty() || file.data.is_empty() {
		return None;
	}
	if !category.allows(original_name) {
		return None;
	}

	let file_name = naming::unique_filename(original_name, None);
	let path = dir.join(&file_name);
	if let Err(err) = fs::write(&path, &file.data).await {
		warn!("Error saving file {:?}: {}", path, err);
		return None;
	}

	let file_name = if recompress && category == Category::Image {
		let final_path = image::recompress_webp(path, image::DEFAULT_QUALITY).await;
		final_path.file_name()?.to_str()?.to_owned()
	} else {
		file_name
	};

	Some(relative_path(dir, &file_name))
}

fn relative_path(dir: &Path, file_name: &str) -> Box<str> {
	dir.join(file_name).to_string_lossy().replace('\\', "/").into()
}

/// Processes a batch of uploads into `dir`.
///
/// The destination is ensured first; when that fails the whole batch is
/// rejected without any per-file attempt. Individual file failures are
/// swallowed: only the successfully stored paths are reported, in input order.
pub(crate) async fn process_batch(
	files: &[UploadedFile],
	dir: &Path,
	category: Category,
	recompress: bool,
) -> UploadOutcome {
	if !ensure_dir(dir).await {
		return UploadOutcome {
			saved: false,
			paths: Vec::new(),
			error: Some("Could not create directory".into()),
		};
	}

	let mut paths = Vec::new();
	for file in files {
		if let Some(path) = persist_file(file, dir, category, recompress).await {
			paths.push(path);
		}
	}

	UploadOutcome { saved: !paths.is_empty(), paths, error: None }
}

// vim: ts=4
