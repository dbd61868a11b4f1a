//! Database module: models, schema and note storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (MySQL-first)
//! - `connection.rs`: per-call connection establishment
//! - `notes.rs`: note operations, one fresh connection per call

pub mod connection;
pub mod models;
pub mod notes;
pub mod schema;

pub use models::Note;
pub use notes::NotesStorage;
pub use schema::MYSQL_INIT;
