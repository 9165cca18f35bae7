//! Upload pipeline behavior tests
//!
//! Covers persistence, batch outcomes, directory handling, WebP
//! recompression safety, and deletion semantics.

use std::path::Path;

use tempfile::TempDir;

use carnet::upload::{delete_file, ensure_dir, image, UploadedFile, Uploader};

fn file(name: &str, data: &[u8]) -> UploadedFile {
	UploadedFile { file_name: Some(name.into()), data: data.to_vec() }
}

fn png_with_alpha() -> Vec<u8> {
	let img = ::image::RgbaImage::from_pixel(8, 8, ::image::Rgba([200, 40, 40, 128]));
	let mut buf = std::io::Cursor::new(Vec::new());
	img.write_to(&mut buf, ::image::ImageFormat::Png).expect("Failed to encode test png");
	buf.into_inner()
}

#[tokio::test]
async fn test_persist_allowed_file() {
	let temp = TempDir::new().expect("Failed to create temp directory");
	let uploader = Uploader::new(temp.path());

	let outcome = uploader.upload_docs(&[file("report.pdf", b"%PDF-1.4")], temp.path().join("docs")).await;

	assert!(outcome.saved);
	assert_eq!(outcome.paths.len(), 1);
	assert!(outcome.error.is_none());
	let path = outcome.paths[0].as_ref();
	assert!(path.ends_with(".pdf"));
	assert!(Path::new(path).exists());
}

#[tokio::test]
async fn test_reject_disallowed_extension() {
	let temp = TempDir::new().expect("Failed to create temp directory");
	let uploader = Uploader::new(temp.path());
	let dir = temp.path().join("docs");

	let outcome = uploader.upload_docs(&[file("malware.exe", b"MZ")], &dir).await;

	assert!(!outcome.saved);
	assert!(outcome.paths.is_empty());
	assert!(outcome.error.is_none());
	// Nothing was written
	let entries: Vec<_> = std::fs::read_dir(&dir)
		.expect("Destination directory should exist")
		.collect();
	assert!(entries.is_empty());
}

#[tokio::test]
async fn test_reject_missing_filename() {
	let temp = TempDir::new().expect("Failed to create temp directory");
	let uploader = Uploader::new(temp.path());

	let nameless = UploadedFile { file_name: None, data: b"data".to_vec() };
	let empty_name = UploadedFile { file_name: Some("".into()), data: b"data".to_vec() };
	let outcome = uploader.upload_any(&[nameless, empty_name], temp.path().join("files")).await;

	assert!(!outcome.saved);
	assert!(outcome.paths.is_empty());
}

#[tokio::test]
async fn test_ensure_dir_is_idempotent() {
	let temp = TempDir::new().expect("Failed to create temp directory");
	let dir = temp.path().join("a/b/c");

	assert!(ensure_dir(&dir).await);
	assert!(ensure_dir(&dir).await);
	assert!(dir.is_dir());
}

#[tokio::test]
async fn test_partial_batch_preserves_order() {
	let temp = TempDir::new().expect("Failed to create temp directory");
	let uploader = Uploader::new(temp.path());

	let files = [
		file("first.pdf", b"one"),
		file("blocked.exe", b"two"),
		file("second.txt", b"three"),
	];
	let outcome = uploader.upload_docs(&files, temp.path().join("docs")).await;

	assert!(outcome.saved);
	assert_eq!(outcome.paths.len(), 2);
	assert!(outcome.paths[0].ends_with(".pdf"));
	assert!(outcome.paths[1].ends_with(".txt"));
	assert_eq!(outcome.saved, !outcome.paths.is_empty());
}

#[tokio::test]
async fn test_directory_creation_failure_rejects_batch() {
	let temp = TempDir::new().expect("Failed to create temp directory");
	let uploader = Uploader::new(temp.path());

	// A regular file where a directory is needed makes creation fail
	let blocker = temp.path().join("blocker");
	std::fs::write(&blocker, b"not a directory").expect("Failed to create blocker file");

	let outcome = uploader.upload_docs(&[file("report.pdf", b"data")], blocker.join("docs")).await;

	assert!(!outcome.saved);
	assert!(outcome.paths.is_empty());
	assert_eq!(outcome.error.as_deref(), Some("Could not create directory"));
}

#[tokio::test]
async fn test_batch_outcome_invariant() {
	let temp = TempDir::new().expect("Failed to create temp directory");
	let uploader = Uploader::new(temp.path());
	let dir = temp.path().join("files");

	let empty = uploader.upload_any(&[], &dir).await;
	assert_eq!(empty.saved, !empty.paths.is_empty());

	let mixed = uploader.upload_any(&[file("a.jpg", b"x"), file("b.xyz", b"y")], &dir).await;
	assert_eq!(mixed.saved, !mixed.paths.is_empty());
	assert!(mixed.saved);
}

#[tokio::test]
async fn test_recompress_corrupt_image_keeps_original() {
	let temp = TempDir::new().expect("Failed to create temp directory");
	let path = temp.path().join("broken.jpg");
	std::fs::write(&path, b"definitely not a jpeg").expect("Failed to write file");

	let result = image::recompress_webp(path.clone(), image::DEFAULT_QUALITY).await;

	assert_eq!(result, path);
	assert!(path.exists());
}

#[tokio::test]
async fn test_recompress_alpha_image() {
	let temp = TempDir::new().expect("Failed to create temp directory");
	let path = temp.path().join("pic.png");
	std::fs::write(&path, png_with_alpha()).expect("Failed to write file");

	let result = image::recompress_webp(path.clone(), image::DEFAULT_QUALITY).await;

	assert_eq!(result.extension().and_then(|e| e.to_str()), Some("webp"));
	assert!(result.exists());
	assert!(!path.exists(), "original should be deleted after recompression");
	// The re-encoded file is a readable image again
	::image::open(&result).expect("Recompressed webp should decode");
}

#[tokio::test]
async fn test_upload_images_with_recompression() {
	let temp = TempDir::new().expect("Failed to create temp directory");
	let uploader = Uploader::new(temp.path());

	let outcome = uploader.upload_images(&[file("pic.png", &png_with_alpha())], None, true).await;

	assert!(outcome.saved);
	assert_eq!(outcome.paths.len(), 1);
	let path = outcome.paths[0].as_ref();
	assert!(path.ends_with(".webp"), "got path {}", path);
	assert!(path.contains("/images/"));
	assert!(Path::new(path).exists());
}

#[tokio::test]
async fn test_upload_images_without_recompression_keeps_extension() {
	let temp = TempDir::new().expect("Failed to create temp directory");
	let uploader = Uploader::new(temp.path());

	let outcome =
		uploader.upload_images(&[file("pic.png", &png_with_alpha())], Some("profile"), false).await;

	assert!(outcome.saved);
	let path = outcome.paths[0].as_ref();
	assert!(path.ends_with(".png"));
	assert!(path.contains("/profile/"));
}

#[tokio::test]
async fn test_delete_file() {
	let temp = TempDir::new().expect("Failed to create temp directory");
	let name = "obsolete.txt";
	std::fs::write(temp.path().join(name), b"bye").expect("Failed to write file");

	assert!(delete_file(temp.path(), name).await);
	assert!(!temp.path().join(name).exists());
	// Deleting again is a no-op
	assert!(!delete_file(temp.path(), name).await);
}

// vim: ts=4
