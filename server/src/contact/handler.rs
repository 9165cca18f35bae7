use axum::{
	extract::{Multipart, Path, State},
	http::StatusCode,
	Json,
};
use serde_json::{Map, Value};

use crate::prelude::*;
use crate::contact_adapter::{Contact, ContactData};
use crate::upload::UploadedFile;

/// GET /api/contacts
pub async fn get_contact_list(State(app): State<App>) -> ClResult<(StatusCode, Json<Vec<Contact>>)> {
	let contacts = app.contact_adapter.list_contacts().await?;

	Ok((StatusCode::OK, Json(contacts)))
}

/// GET /api/contacts/{id}
pub async fn get_contact_details(
	State(app): State<App>,
	Path(contact_id): Path<u32>,
) -> ClResult<(StatusCode, Json<Contact>)> {
	let contact = app.contact_adapter.read_contact(contact_id).await?;

	Ok((StatusCode::OK, Json(contact)))
}

/// POST /api/contacts
///
/// Multipart form: contact fields as text parts, plus an optional `image`
/// file part stored under the static `profile` folder.
pub async fn post_contact(
	State(app): State<App>,
	mut multipart: Multipart,
) -> ClResult<(StatusCode, Json<Contact>)> {
	let mut fields = Map::new();
	let mut images: Vec<UploadedFile> = Vec::new();

	while let Some(field) = multipart
		.next_field()
		.await
		.map_err(|err| Error::ValidationError(format!("invalid multipart body: {}", err)))?
	{
		let name = field.name().unwrap_or_default().to_owned();
		if field.file_name().is_some() {
			if name == "image" {
				let file_name = field.file_name().map(Box::<str>::from);
				let data = field
					.bytes()
					.await
					.map_err(|err| Error::ValidationError(format!("invalid multipart body: {}", err)))?
					.to_vec();
				images.push(UploadedFile { file_name, data });
			}
			continue;
		}
		let text = field
			.text()
			.await
			.map_err(|err| Error::ValidationError(format!("invalid multipart body: {}", err)))?;
		fields.insert(name, Value::String(text));
	}

	let data: ContactData = serde_json::from_value(Value::Object(fields))
		.map_err(|err| Error::ValidationError(format!("invalid contact data: {}", err)))?;

	if !images.is_empty() {
		let outcome = app.uploader.upload_images(&images, Some("profile"), false).await;
		debug!("Profile image upload: saved={} paths={:?}", outcome.saved, outcome.paths);
	}

	let contact = app.contact_adapter.create_contact(&data).await?;

	Ok((StatusCode::CREATED, Json(contact)))
}

/// PUT /api/contacts/{id}
pub async fn put_contact(
	State(app): State<App>,
	Path(contact_id): Path<u32>,
	Json(data): Json<ContactData>,
) -> ClResult<(StatusCode, Json<Contact>)> {
	let contact = app.contact_adapter.update_contact(contact_id, &data).await?;

	Ok((StatusCode::OK, Json(contact)))
}

/// DELETE /api/contacts/{id}
pub async fn delete_contact(
	State(app): State<App>,
	Path(contact_id): Path<u32>,
) -> ClResult<(StatusCode, Json<Contact>)> {
	let contact = app.contact_adapter.delete_contact(contact_id).await?;

	Ok((StatusCode::OK, Json(contact)))
}

// vim: ts=4
