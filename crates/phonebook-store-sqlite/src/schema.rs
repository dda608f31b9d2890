//! SQL schema for the phonebook SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Palette entries. Written once at bootstrap, never updated or deleted.
CREATE TABLE IF NOT EXISTS color (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    code          TEXT NOT NULL,   -- hex, e.g. '#B7D3DF'
    display_name  TEXT NOT NULL,
    tag           TEXT NOT NULL    -- 'Mobile' | 'Family' | 'Home' | 'Office' | 'Other'
);

-- AUTOINCREMENT so a purged id is never handed out again.
CREATE TABLE IF NOT EXISTS contact (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT NOT NULL,
    phone_number  TEXT NOT NULL,
    tag           TEXT NOT NULL,
    color_id      INTEGER NOT NULL REFERENCES color(id),
    trashed       INTEGER NOT NULL DEFAULT 0 CHECK (trashed IN (0, 1))
);

PRAGMA user_version = 1;
";
