//! SQL DDL for initializing the notes table.
//! MySQL-first design; `CREATE TABLE IF NOT EXISTS` keeps it idempotent.

/// MySQL schema with:
/// - `id` BIGINT AUTO_INCREMENT PRIMARY KEY (monotonic, server-assigned)
/// - `note` TEXT NOT NULL
/// - `created_at` TIMESTAMP assigned by the server at insert
pub const MYSQL_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id BIGINT AUTO_INCREMENT PRIMARY KEY,
    note TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;
