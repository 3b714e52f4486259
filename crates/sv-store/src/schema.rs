use rusqlite::Connection;

use crate::error::Result;

pub const SCHEMA_VERSION: i64 = 1;

pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA journal_mode = WAL;")?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.pragma_update(None, "busy_timeout", 5000)?;

    // Force-checkpoint any stale WAL data into the main DB on startup.
    // Errors are non-fatal — in-memory DBs and fresh files legitimately fail this.
    if conn
        .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")
        .is_ok()
    {
        tracing::debug!("startup WAL checkpoint complete");
    }

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS metadata (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS runs (
            id           TEXT PRIMARY KEY,
            model        TEXT NOT NULL,
            indep_var    TEXT NOT NULL DEFAULT '',
            g            REAL NOT NULL,
            s            REAL NOT NULL,
            complexity   REAL NOT NULL,
            lower        REAL NOT NULL,
            upper        REAL NOT NULL,
            count        INTEGER NOT NULL,
            created_at   TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS samples (
            run_id         TEXT NOT NULL REFERENCES runs(id) ON DELETE CASCADE,
            idx            INTEGER NOT NULL,
            x              REAL NOT NULL,
            reference      REAL,
            alternative    REAL,
            ratio          REAL,
            classification TEXT,
            error          TEXT,
            PRIMARY KEY (run_id, idx)
        );

        CREATE INDEX IF NOT EXISTS idx_samples_run ON samples(run_id);
        CREATE INDEX IF NOT EXISTS idx_runs_created ON runs(created_at);
        ",
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO metadata (key, value) VALUES ('schema_version', ?1)",
        [SCHEMA_VERSION.to_string()],
    )?;

    Ok(())
}
