//! App state type

use std::{
	path::{Path, PathBuf},
	sync::Arc,
};

use crate::prelude::*;
use crate::contact_adapter::ContactAdapter;
use crate::routes;
use crate::upload::remote::{MediaHost, MediaHostOpts};
use crate::upload::Uploader;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub uploader: Uploader,
	pub media_host: Option<MediaHost>,

	pub contact_adapter: Arc<dyn ContactAdapter>,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	listen: Box<str>,
	pub static_dir: Box<Path>,
	media_host: Option<MediaHostOpts>,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	contact_adapter: Option<Arc<dyn ContactAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:7001".into(),
				static_dir: PathBuf::from("./static").into(),
				media_host: None,
			},
			contact_adapter: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self { self.opts.listen = listen.into(); self }
	pub fn static_dir(&mut self, static_dir: impl Into<Box<Path>>) -> &mut Self { self.opts.static_dir = static_dir.into(); self }
	pub fn media_host(&mut self, media_host: MediaHostOpts) -> &mut Self { self.opts.media_host = Some(media_host); self }

	// Adapters
	pub fn contact_adapter(&mut self, contact_adapter: Arc<dyn ContactAdapter>) -> &mut Self { self.contact_adapter = Some(contact_adapter); self }

	pub async fn run(self) -> ClResult<()> {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		info!("Carnet V{}", VERSION);

		let contact_adapter = self
			.contact_adapter
			.ok_or(Error::Internal("no contact adapter configured".into()))?;
		let uploader = Uploader::new(self.opts.static_dir.clone());
		let media_host = self.opts.media_host.clone().map(MediaHost::new);
		let app: App = Arc::new(AppState {
			uploader,
			media_host,
			contact_adapter,
			opts: self.opts,
		});
		tokio::fs::create_dir_all(&app.opts.static_dir).await?;

		let router = routes::init(app.clone());
		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on {}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self { Self::new() }
}

// vim: ts=4
