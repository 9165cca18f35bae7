use axum::{
	extract::{Multipart, Path, Query, State},
	http::StatusCode,
	Json,
};
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::upload::{Category, UploadOutcome, UploadedFile};

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
	pub subfolder: Option<String>,
	#[serde(default)]
	pub recompress: bool,
}

/// Collects the file parts of a multipart body into memory.
pub(crate) async fn collect_files(multipart: &mut Multipart) -> ClResult<Vec<UploadedFile>> {
	let mut files = Vec::new();
	while let Some(field) = multipart
		.next_field()
		.await
		.map_err(|err| Error::ValidationError(format!("invalid multipart body: {}", err)))?
	{
		let Some(file_name) = field.file_name().map(Box::<str>::from) else { continue };
		let data = field
			.bytes()
			.await
			.map_err(|err| Error::ValidationError(format!("invalid multipart body: {}", err)))?
			.to_vec();
		files.push(UploadedFile { file_name: Some(file_name), data });
	}
	Ok(files)
}

// Upload destinations are constrained to subfolders of the static tree
fn validate_subfolder(subfolder: Option<&str>) -> ClResult<Option<&str>> {
	match subfolder {
		None => Ok(None),
		Some(sub) => {
			if sub.is_empty()
				|| sub.starts_with(['/', '\\'])
				|| sub.split(['/', '\\']).any(|part| part.is_empty() || part == "." || part == "..")
			{
				return Err(Error::ValidationError(format!("invalid subfolder: {}", sub)));
			}
			Ok(Some(sub))
		}
	}
}

/// POST /api/files/{category}
pub async fn post_files(
	State(app): State<App>,
	Path(category): Path<String>,
	Query(opts): Query<UploadQuery>,
	mut multipart: Multipart,
) -> ClResult<(StatusCode, Json<UploadOutcome>)> {
	let category = Category::from_str_opt(&category)
		.ok_or_else(|| Error::ValidationError(format!("unknown category: {}", category)))?;
	let subfolder = validate_subfolder(opts.subfolder.as_deref())?;
	let files = collect_files(&mut multipart).await?;
	debug!("Uploading {} file(s), category {}", files.len(), category);

	let uploader = &app.uploader;
	let outcome = match category {
		Category::Image => uploader.upload_images(&files, subfolder, opts.recompress).await,
		Category::Video => {
			let dir = uploader.base_dir().join(subfolder.unwrap_or("videos"));
			uploader.upload_videos(&files, dir).await
		}
		Category::Audio => {
			let dir = uploader.base_dir().join(subfolder.unwrap_or("audios"));
			uploader.upload_audios(&files, dir).await
		}
		Category::Document => {
			let dir = uploader.base_dir().join(subfolder.unwrap_or("docs"));
			uploader.upload_docs(&files, dir).await
		}
		Category::Any => {
			let dir = uploader.base_dir().join(subfolder.unwrap_or("files"));
			uploader.upload_any(&files, dir).await
		}
	};

	Ok((StatusCode::OK, Json(outcome)))
}

#[derive(Debug, Deserialize)]
pub struct OffloadRequest {
	/// Path of an already stored file, relative to the static tree
	pub path: String,
	#[serde(rename = "publicId")]
	pub public_id: String,
}

#[derive(Debug, Serialize)]
pub struct OffloadResponse {
	pub url: Option<Box<str>>,
}

/// POST /api/files/offload
///
/// Pushes an already stored file to the configured media host. This does not
/// remove the local copy; offloading is a deliberate two-step flow.
pub async fn post_offload(
	State(app): State<App>,
	Json(req): Json<OffloadRequest>,
) -> ClResult<(StatusCode, Json<OffloadResponse>)> {
	let Some(media_host) = &app.media_host else {
		return Err(Error::ValidationError("media host is not configured".into()));
	};
	validate_subfolder(Some(&req.path))?;

	let local_path = app.uploader.base_dir().join(&req.path);
	let url = media_host.send(&local_path, &req.public_id).await;

	Ok((StatusCode::OK, Json(OffloadResponse { url })))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_validate_subfolder() {
		assert!(validate_subfolder(None).is_ok());
		assert!(validate_subfolder(Some("profile")).is_ok());
		assert!(validate_subfolder(Some("gallery/2026")).is_ok());
		assert!(validate_subfolder(Some("../escape")).is_err());
		assert!(validate_subfolder(Some("/abs")).is_err());
		assert!(validate_subfolder(Some("a//b")).is_err());
		assert!(validate_subfolder(Some("")).is_err());
	}
}

// vim: ts=4
