use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::error::ImportError;
use crate::guide::{Guide, PortGuide, ShipGuide};
use crate::parser::GuideKind;

pub fn connect(path: &Path) -> Result<Connection> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    }
    let conn = Connection::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS ship_guides (
            slug             TEXT PRIMARY KEY,
            name             TEXT NOT NULL,
            display_name     TEXT,
            cruise_line_slug TEXT,
            status           TEXT NOT NULL DEFAULT 'draft',
            featured         BOOLEAN NOT NULL DEFAULT 0,
            document         TEXT NOT NULL,
            source           TEXT,
            created_at       TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at       TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_ship_guides_line ON ship_guides(cruise_line_slug);
        CREATE INDEX IF NOT EXISTS idx_ship_guides_status ON ship_guides(status);

        CREATE TABLE IF NOT EXISTS port_guides (
            slug        TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            country     TEXT,
            status      TEXT NOT NULL DEFAULT 'draft',
            featured    BOOLEAN NOT NULL DEFAULT 0,
            document    TEXT NOT NULL,
            source      TEXT,
            created_at  TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at  TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_port_guides_status ON port_guides(status);

        CREATE TABLE IF NOT EXISTS import_log (
            id          INTEGER PRIMARY KEY,
            kind        TEXT NOT NULL CHECK(kind IN ('ship','port')),
            source      TEXT,
            slug        TEXT,
            outcome     TEXT NOT NULL CHECK(outcome IN ('imported','rejected')),
            message     TEXT,
            imported_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_import_log_slug ON import_log(slug);
        ",
    )?;
    Ok(())
}

fn table(kind: GuideKind) -> &'static str {
    match kind {
        GuideKind::Ship => "ship_guides",
        GuideKind::Port => "port_guides",
    }
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn encode<G: Guide + serde::Serialize>(guide: &G) -> Result<String, ImportError> {
    serde_json::to_string(guide).map_err(|source| ImportError::Encode {
        slug: guide.slug().to_string(),
        source,
    })
}

// ── Upserts (one row per slug) ──

pub fn upsert_ship_guide(
    conn: &Connection,
    guide: &ShipGuide,
    source: Option<&str>,
) -> Result<(), ImportError> {
    let document = encode(guide)?;
    conn.execute(
        "INSERT INTO ship_guides
         (slug, name, display_name, cruise_line_slug, status, featured, document, source, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(slug) DO UPDATE SET
            name = excluded.name,
            display_name = excluded.display_name,
            cruise_line_slug = excluded.cruise_line_slug,
            status = excluded.status,
            featured = excluded.featured,
            document = excluded.document,
            source = excluded.source,
            updated_at = excluded.updated_at",
        rusqlite::params![
            guide.slug,
            guide.name,
            guide.display_name,
            guide.cruise_line_slug,
            guide.status,
            guide.featured,
            document,
            source,
            now(),
        ],
    )?;
    Ok(())
}

pub fn upsert_port_guide(
    conn: &Connection,
    guide: &PortGuide,
    source: Option<&str>,
) -> Result<(), ImportError> {
    let document = encode(guide)?;
    conn.execute(
        "INSERT INTO port_guides
         (slug, name, country, status, featured, document, source, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT(slug) DO UPDATE SET
            name = excluded.name,
            country = excluded.country,
            status = excluded.status,
            featured = excluded.featured,
            document = excluded.document,
            source = excluded.source,
            updated_at = excluded.updated_at",
        rusqlite::params![
            guide.slug,
            guide.name,
            guide.country,
            guide.status,
            guide.featured,
            document,
            source,
            now(),
        ],
    )?;
    Ok(())
}

// ── Import log ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Imported,
    Rejected,
}

impl Outcome {
    fn as_str(self) -> &'static str {
        match self {
            Outcome::Imported => "imported",
            Outcome::Rejected => "rejected",
        }
    }
}

pub fn log_import(
    conn: &Connection,
    kind: GuideKind,
    source: Option<&str>,
    slug: Option<&str>,
    outcome: Outcome,
    message: Option<&str>,
) -> Result<(), ImportError> {
    conn.execute(
        "INSERT INTO import_log (kind, source, slug, outcome, message, imported_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![kind.as_str(), source, slug, outcome.as_str(), message, now()],
    )?;
    Ok(())
}

// ── Queries ──

pub fn fetch_document(conn: &Connection, kind: GuideKind, slug: &str) -> Result<Option<String>> {
    let sql = format!("SELECT document FROM {} WHERE slug = ?1", table(kind));
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query_map([slug], |row| row.get::<_, String>(0))?;
    Ok(rows.next().transpose()?)
}

pub struct GuideSummary {
    pub slug: String,
    pub name: String,
    /// Cruise line slug for ships, country for ports.
    pub group: String,
    pub status: String,
    pub featured: bool,
    pub updated_at: String,
}

pub fn list_guides(
    conn: &Connection,
    kind: GuideKind,
    status: Option<&str>,
    limit: usize,
) -> Result<Vec<GuideSummary>> {
    let group_col = match kind {
        GuideKind::Ship => "cruise_line_slug",
        GuideKind::Port => "country",
    };
    let sql = format!(
        "SELECT slug, name, COALESCE({}, ''), status, featured, updated_at
         FROM {}
         WHERE (?1 IS NULL OR status = ?1)
         ORDER BY featured DESC, name
         LIMIT ?2",
        group_col,
        table(kind)
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(rusqlite::params![status, limit as i64], |row| {
            Ok(GuideSummary {
                slug: row.get(0)?,
                name: row.get(1)?,
                group: row.get(2)?,
                status: row.get(3)?,
                featured: row.get(4)?,
                updated_at: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub struct Stats {
    pub ship_guides: i64,
    pub port_guides: i64,
    pub published: i64,
    pub featured: i64,
    pub imported: i64,
    pub rejected: i64,
}

pub fn get_stats(conn: &Connection) -> Result<Stats> {
    let count = |sql: &str| -> Result<i64> {
        conn.query_row(sql, [], |row| row.get(0))
            .with_context(|| format!("query failed: {}", sql))
    };
    Ok(Stats {
        ship_guides: count("SELECT COUNT(*) FROM ship_guides")?,
        port_guides: count("SELECT COUNT(*) FROM port_guides")?,
        published: count(
            "SELECT (SELECT COUNT(*) FROM ship_guides WHERE status = 'published')
                  + (SELECT COUNT(*) FROM port_guides WHERE status = 'published')",
        )?,
        featured: count(
            "SELECT (SELECT COUNT(*) FROM ship_guides WHERE featured)
                  + (SELECT COUNT(*) FROM port_guides WHERE featured)",
        )?,
        imported: count("SELECT COUNT(*) FROM import_log WHERE outcome = 'imported'")?,
        rejected: count("SELECT COUNT(*) FROM import_log WHERE outcome = 'rejected'")?,
    })
}
