//! Database schema and migrations for MailAssist.
//!
//! Migrations are applied sequentially when the database is first opened
//! or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script executed in order. The `schema_version`
/// table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: users
    r#"
CREATE TABLE users (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    email       TEXT NOT NULL,
    password    TEXT NOT NULL,           -- Argon2 hash
    created_at  TEXT NOT NULL
);

CREATE UNIQUE INDEX idx_users_email_nocase ON users(email COLLATE NOCASE);
"#,
    // v2: generated replies
    r#"
CREATE TABLE generated_emails (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id     INTEGER NOT NULL REFERENCES users(id),
    prompt      TEXT NOT NULL,
    response    TEXT NOT NULL,
    created_at  TEXT NOT NULL            -- RFC3339, fixed width (UTC, microseconds)
);

CREATE INDEX idx_generated_emails_user_created ON generated_emails(user_id, created_at);
"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_not_empty() {
        assert!(!MIGRATIONS.is_empty());
    }

    #[test]
    fn test_first_migration_contains_users_table() {
        let first = MIGRATIONS[0];
        assert!(first.contains("CREATE TABLE users"));
        assert!(first.contains("email"));
        assert!(first.contains("password"));
        assert!(first.contains("UNIQUE INDEX"));
    }

    #[test]
    fn test_generated_emails_migration() {
        let second = MIGRATIONS[1];
        assert!(second.contains("CREATE TABLE generated_emails"));
        assert!(second.contains("REFERENCES users(id)"));
        assert!(second.contains("prompt"));
        assert!(second.contains("response"));
        assert!(second.contains("created_at"));
    }
}
