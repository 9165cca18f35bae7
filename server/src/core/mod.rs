//! Core subsystem. App state, builder, and server startup.

pub mod app;

// vim: ts=4
