//! Contact adapter CRUD tests

use tempfile::TempDir;

use carnet::contact_adapter::{ContactAdapter, ContactData};
use carnet::error::Error;
use carnet_contact_adapter_sqlite::ContactAdapterSqlite;

async fn create_test_adapter() -> (ContactAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter = ContactAdapterSqlite::new(temp_dir.path().join("contacts.db"))
		.await
		.expect("Failed to create adapter");
	(adapter, temp_dir)
}

fn sample_contact(first_name: &str, last_name: &str) -> ContactData {
	ContactData {
		first_name: first_name.into(),
		last_name: last_name.into(),
		address: "12 Elm Street".into(),
		city: "Springfield".into(),
		state: "IL".into(),
		zip_code: "62704".into(),
		phone: "555-0142".into(),
		email: format!("{}@example.com", first_name.to_lowercase()).into(),
	}
}

#[tokio::test]
async fn test_create_and_read_contact() {
	let (adapter, _temp) = create_test_adapter().await;

	let created = adapter
		.create_contact(&sample_contact("Ada", "Lovelace"))
		.await
		.expect("Failed to create contact");
	assert_eq!(created.first_name.as_ref(), "Ada");
	assert_eq!(created.email.as_ref(), "ada@example.com");
	assert!(created.created_at.0 > 0);

	let read = adapter.read_contact(created.contact_id).await.expect("Failed to read contact");
	assert_eq!(read.contact_id, created.contact_id);
	assert_eq!(read.last_name.as_ref(), "Lovelace");
}

#[tokio::test]
async fn test_list_contacts_in_insertion_order() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.create_contact(&sample_contact("Ada", "Lovelace")).await.expect("create");
	adapter.create_contact(&sample_contact("Grace", "Hopper")).await.expect("create");

	let contacts = adapter.list_contacts().await.expect("Failed to list contacts");
	assert_eq!(contacts.len(), 2);
	assert_eq!(contacts[0].first_name.as_ref(), "Ada");
	assert_eq!(contacts[1].first_name.as_ref(), "Grace");
}

#[tokio::test]
async fn test_update_contact() {
	let (adapter, _temp) = create_test_adapter().await;

	let created =
		adapter.create_contact(&sample_contact("Ada", "Lovelace")).await.expect("create");

	let mut data = sample_contact("Ada", "King");
	data.city = "London".into();
	let updated =
		adapter.update_contact(created.contact_id, &data).await.expect("Failed to update contact");
	assert_eq!(updated.contact_id, created.contact_id);
	assert_eq!(updated.last_name.as_ref(), "King");
	assert_eq!(updated.city.as_ref(), "London");
}

#[tokio::test]
async fn test_delete_contact_returns_removed_record() {
	let (adapter, _temp) = create_test_adapter().await;

	let created =
		adapter.create_contact(&sample_contact("Ada", "Lovelace")).await.expect("create");

	let removed =
		adapter.delete_contact(created.contact_id).await.expect("Failed to delete contact");
	assert_eq!(removed.contact_id, created.contact_id);

	let res = adapter.read_contact(created.contact_id).await;
	assert!(matches!(res, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_missing_contact_is_not_found() {
	let (adapter, _temp) = create_test_adapter().await;

	assert!(matches!(adapter.read_contact(4711).await, Err(Error::NotFound)));
	assert!(matches!(
		adapter.update_contact(4711, &sample_contact("No", "One")).await,
		Err(Error::NotFound)
	));
	assert!(matches!(adapter.delete_contact(4711).await, Err(Error::NotFound)));
}

// vim: ts=4
