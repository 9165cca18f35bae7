//! Legacy media-host offload.
//!
//! Pushes an already stored local file to a Cloudinary-compatible media host.
//! This path is independent of local persistence: nothing uploads through it
//! automatically, and nothing cleans up the local copy afterwards.

use sha2::{Digest, Sha256};
use std::path::Path;

use crate::prelude::*;
use crate::types;

#[derive(Debug, Clone)]
pub struct MediaHostOpts {
	pub cloud_name: Box<str>,
	pub api_key: Box<str>,
	pub api_secret: Box<str>,
}

#[derive(Debug)]
pub struct MediaHost {
	opts: MediaHostOpts,
	client: reqwest::Client,
}

impl MediaHost {
	pub fn new(opts: MediaHostOpts) -> Self {
		Self { opts, client: reqwest::Client::new() }
	}

	/// Uploads a stored local file under the given logical id and returns its
	/// public secure URL. Any failure (network, auth, misconfiguration) is
	/// logged and yields `None`.
	pub async fn send(&self, path: impl AsRef<Path>, public_id: &str) -> Option<Box<str>> {
		match self.send_inner(path.as_ref(), public_id).await {
			Ok(url) => Some(url),
			Err(err) => {
				warn!("Error uploading to media host: {}", err);
				None
			}
		}
	}

	async fn send_inner(&self, path: &Path, public_id: &str) -> ClResult<Box<str>> {
		let timestamp = types::now();
		// Parameters are signed in alphabetical order, followed by the secret
		let to_sign =
			format!("public_id={}&timestamp={}{}", public_id, timestamp, self.opts.api_secret);
		let signature = format!("{:x}", Sha256::digest(to_sign.as_bytes()));

		let data = tokio::fs::read(path).await?;
		let file_name = path
			.file_name()
			.and_then(|name| name.to_str())
			.unwrap_or("file")
			.to_owned();

		let form = reqwest::multipart::Form::new()
			.text("api_key", self.opts.api_key.to_string())
			.text("public_id", public_id.to_owned())
			.text("timestamp", timestamp.to_string())
			.text("signature_algorithm", "sha256")
			.text("signature", signature)
			.part("file", reqwest::multipart::Part::bytes(data).file_name(file_name));

		let url = format!("https://api.cloudinary.com/v1_1/{}/auto/upload", self.opts.cloud_name);
		let res = self
			.client
			.post(&url)
			.multipart(form)
			.send()
			.await
			.map_err(|err| Error::Internal(format!("media host request failed: {}", err)))?;
		if !res.status().is_success() {
			return Err(Error::Internal(format!("media host returned {}", res.status())));
		}

		let body: serde_json::Value = res
			.json()
			.await
			.map_err(|err| Error::Internal(format!("media host response invalid: {}", err)))?;
		let secure_url = body.get("secure_url").and_then(|url| url.as_str()).ok_or(Error::Parse)?;

		Ok(secure_url.into())
	}
}

// vim: ts=4
