use std::{env, path::PathBuf, sync::Arc};

use carnet::upload::remote::MediaHostOpts;
use carnet_contact_adapter_sqlite::ContactAdapterSqlite;

#[tokio::main]
async fn main() {
	let listen = env::var("LISTEN").unwrap_or("127.0.0.1:7001".to_string());
	let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or("./data".to_string()));
	let static_dir = PathBuf::from(env::var("STATIC_DIR").unwrap_or("./static".to_string()));

	std::fs::create_dir_all(&data_dir).unwrap();
	let contact_adapter =
		Arc::new(ContactAdapterSqlite::new(data_dir.join("contacts.db")).await.unwrap());

	let mut builder = carnet::AppBuilder::new();
	builder.listen(listen).static_dir(static_dir).contact_adapter(contact_adapter);

	// MEDIA_HOST=1 enables the legacy offload path; credentials must be complete
	if env::var("MEDIA_HOST").map(|v| v == "1" || v == "true").unwrap_or(false) {
		builder.media_host(MediaHostOpts {
			cloud_name: env::var("MEDIA_HOST_NAME").unwrap_or_default().into(),
			api_key: env::var("MEDIA_HOST_KEY").unwrap_or_default().into(),
			api_secret: env::var("MEDIA_HOST_SECRET").unwrap_or_default().into(),
		});
	}

	builder.run().await.unwrap();
}

// vim: ts=4
