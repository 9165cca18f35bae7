//! Carnet is a small self-hosted contact book server.
//!
//! # Features
//!
//! - Contact records with a JSON CRUD API
//! - Local file uploads (images, videos, audio, documents)
//!		- collision-resistant file naming
//!		- optional WebP recompression for images
//! - Optional offload of stored files to a third-party media host
//! - Pluggable contact storage (SQLite adapter included)

#![forbid(unsafe_code)]

pub mod error;
pub mod core;
pub mod contact;
pub mod contact_adapter;
pub mod upload;
pub mod prelude;
pub mod types;
pub mod routes;

pub use crate::core::app::{App, AppBuilder};

// vim: ts=4
