//! SQLite-backed contact store adapter for the Carnet contact book server.

use async_trait::async_trait;
use sqlx::{
	sqlite::{self, SqlitePool, SqliteRow},
	Row,
};
use std::path::Path;

use carnet::contact_adapter::{Contact, ContactAdapter, ContactData};
use carnet::prelude::*;

// Helper functions
//******************
fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

fn map_res<T, F>(row: Result<SqliteRow, sqlx::Error>, f: F) -> ClResult<T>
where
	F: FnOnce(SqliteRow) -> Result<T, sqlx::Error>,
{
	match row {
		Ok(row) => f(row).inspect_err(inspect).map_err(|_| Error::DbError),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

fn map_contact(row: SqliteRow) -> Result<Contact, sqlx::Error> {
	Ok(Contact {
		contact_id: row.try_get("contact_id")?,
		first_name: row.try_get("first_name")?,
		last_name: row.try_get("last_name")?,
		address: row.try_get("address")?,
		city: row.try_get("city")?,
		state: row.try_get("state")?,
		zip_code: row.try_get("zip_code")?,
		phone: row.try_get("phone")?,
		email: row.try_get("email")?,
		created_at: row.try_get("created_at").map(Timestamp)?,
	})
}

async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS contacts (
			contact_id INTEGER PRIMARY KEY AUTOINCREMENT,
			first_name TEXT NOT NULL,
			last_name TEXT NOT NULL,
			address TEXT NOT NULL DEFAULT '',
			city TEXT NOT NULL DEFAULT '',
			state TEXT NOT NULL DEFAULT '',
			zip_code TEXT NOT NULL DEFAULT '',
			phone TEXT NOT NULL DEFAULT '',
			email TEXT NOT NULL DEFAULT '',
			created_at INTEGER NOT NULL DEFAULT (unixepoch())
		)",
	)
	.execute(db)
	.await?;

	Ok(())
}

#[derive(Debug)]
pub struct ContactAdapterSqlite {
	db: SqlitePool,
}

impl ContactAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> ClResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.or(Err(Error::DbError))?;

		init_db(&db).await.inspect_err(inspect).or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl ContactAdapter for ContactAdapterSqlite {
	async fn list_contacts(&self) -> ClResult<Vec<Contact>> {
		let rows = sqlx::query(
			"SELECT contact_id, first_name, last_name, address, city, state, zip_code,
				phone, email, created_at
			FROM contacts ORDER BY contact_id",
		)
		.fetch_all(&self.db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

		rows.into_iter()
			.map(|row| map_contact(row).inspect_err(inspect).map_err(|_| Error::DbError))
			.collect()
	}

	async fn read_contact(&self, contact_id: u32) -> ClResult<Contact> {
		let res = sqlx::query(
			"SELECT contact_id, first_name, last_name, address, city, state, zip_code,
				phone, email, created_at
			FROM contacts WHERE contact_id = ?1",
		)
		.bind(contact_id)
		.fetch_one(&self.db)
		.await;

		map_res(res, map_contact)
	}

	async fn create_contact(&self, data: &ContactData) -> ClResult<Contact> {
		let res = sqlx::query(
			"INSERT INTO contacts (first_name, last_name, address, city, state, zip_code, phone, email)
			VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
			RETURNING contact_id, first_name, last_name, address, city, state, zip_code,
				phone, email, created_at",
		)
		.bind(&*data.first_name)
		.bind(&*data.last_name)
		.bind(&*data.address)
		.bind(&*data.city)
		.bind(&*data.state)
		.bind(&*data.zip_code)
		.bind(&*data.phone)
		.bind(&*data.email)
		.fetch_one(&self.db)
		.await;

		map_res(res, map_contact)
	}

	async fn update_contact(&self, contact_id: u32, data: &ContactData) -> ClResult<Contact> {
		let res = sqlx::query(
			"UPDATE contacts
			SET first_name = ?1, last_name = ?2, address = ?3, city = ?4, state = ?5,
				zip_code = ?6, phone = ?7, email = ?8
			WHERE contact_id = ?9
			RETURNING contact_id, first_name, last_name, address, city, state, zip_code,
				phone, email, created_at",
		)
		.bind(&*data.first_name)
		.bind(&*data.last_name)
		.bind(&*data.address)
		.bind(&*data.city)
		.bind(&*data.state)
		.bind(&*data.zip_code)
		.bind(&*data.phone)
		.bind(&*data.email)
		.bind(contact_id)
		.fetch_one(&self.db)
		.await;

		map_res(res, map_contact)
	}

	async fn delete_contact(&self, contact_id: u32) -> ClResult<Contact> {
		let res = sqlx::query(
			"DELETE FROM contacts WHERE contact_id = ?1
			RETURNING contact_id, first_name, last_name, address, city, state, zip_code,
				phone, email, created_at",
		)
		.bind(contact_id)
		.fetch_one(&self.db)
		.await;

		map_res(res, map_contact)
	}
}

// vim: ts=4
