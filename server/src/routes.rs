use axum::{
	routing::{delete, get, post, put},
	Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::contact;
use crate::upload;
use crate::App;

pub fn init(state: App) -> Router {
	let api_router = Router::new()
		.route("/api/contacts", get(contact::handler::get_contact_list))
		.route("/api/contacts", post(contact::handler::post_contact))
		.route("/api/contacts/{id}", get(contact::handler::get_contact_details))
		.route("/api/contacts/{id}", put(contact::handler::put_contact))
		.route("/api/contacts/{id}", delete(contact::handler::delete_contact))
		.route("/api/files/offload", post(upload::handler::post_offload))
		.route("/api/files/{category}", post(upload::handler::post_files));

	Router::new()
		.merge(api_router)
		.nest_service("/static", ServeDir::new(state.uploader.base_dir()))
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
		.with_state(state)
}

// vim: ts=4
