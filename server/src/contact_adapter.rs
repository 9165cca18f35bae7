use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::prelude::*;

/// One contact record
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
	#[serde(rename = "id")]
	pub contact_id: u32,
	#[serde(rename = "firstName")]
	pub first_name: Box<str>,
	#[serde(rename = "lastName")]
	pub last_name: Box<str>,
	pub address: Box<str>,
	pub city: Box<str>,
	pub state: Box<str>,
	#[serde(rename = "zipCode")]
	pub zip_code: Box<str>,
	pub phone: Box<str>,
	pub email: Box<str>,
	#[serde(rename = "createdAt")]
	pub created_at: Timestamp,
}

/// Contact fields as supplied by the caller (create and update)
#[derive(Debug, Clone, Deserialize)]
pub struct ContactData {
	#[serde(rename = "firstName")]
	pub first_name: Box<str>,
	#[serde(rename = "lastName")]
	pub last_name: Box<str>,
	#[serde(default)]
	pub address: Box<str>,
	#[serde(default)]
	pub city: Box<str>,
	#[serde(default)]
	pub state: Box<str>,
	#[serde(rename = "zipCode", default)]
	pub zip_code: Box<str>,
	#[serde(default)]
	pub phone: Box<str>,
	#[serde(default)]
	pub email: Box<str>,
}

#[async_trait]
pub trait ContactAdapter: Debug + Send + Sync {
	async fn list_contacts(&self) -> ClResult<Vec<Contact>>;
	async fn read_contact(&self, contact_id: u32) -> ClResult<Contact>;
	async fn create_contact(&self, data: &ContactData) -> ClResult<Contact>;
	async fn update_contact(&self, contact_id: u32, data: &ContactData) -> ClResult<Contact>;
	/// Removes a contact, returning the removed record
	async fn delete_contact(&self, contact_id: u32) -> ClResult<Contact>;
}

// vim: ts=4
