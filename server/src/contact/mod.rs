//! Contact subsystem. CRUD API over the configured contact adapter.

pub mod handler;

// vim: ts=4
