use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rusqlite::Connection;
use serde::Serialize;
use tracing::{info, warn};

use crate::db::{self, Outcome};
use crate::error::ImportError;
use crate::guide::{Guide, PortGuide, ShipGuide};
use crate::parser::{self, GuideKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedGuide {
    Ship(ShipGuide),
    Port(PortGuide),
}

impl ParsedGuide {
    pub fn parse(kind: GuideKind, markdown: &str) -> ParsedGuide {
        match kind {
            GuideKind::Ship => ParsedGuide::Ship(parser::parse_ship_guide(markdown)),
            GuideKind::Port => ParsedGuide::Port(parser::parse_port_guide(markdown)),
        }
    }

    pub fn kind(&self) -> GuideKind {
        match self {
            ParsedGuide::Ship(_) => GuideKind::Ship,
            ParsedGuide::Port(_) => GuideKind::Port,
        }
    }

    pub fn guide(&self) -> &dyn Guide {
        match self {
            ParsedGuide::Ship(g) => g,
            ParsedGuide::Port(g) => g,
        }
    }
}

/// Upload-handler check: a guide without slug or name is refused.
pub fn validate(guide: &dyn Guide) -> Result<(), ImportError> {
    if guide.slug().trim().is_empty() || guide.name().trim().is_empty() {
        return Err(ImportError::MissingSlugOrTitle);
    }
    Ok(())
}

/// Parse with an explicit kind, or detect it from the section names.
pub fn parse_and_validate(kind: Option<GuideKind>, markdown: &str) -> Result<ParsedGuide, ImportError> {
    let kind = kind.unwrap_or_else(|| GuideKind::detect(markdown));
    let parsed = ParsedGuide::parse(kind, markdown);
    validate(parsed.guide())?;
    Ok(parsed)
}

pub fn store(conn: &Connection, parsed: &ParsedGuide, source: Option<&str>) -> Result<(), ImportError> {
    match parsed {
        ParsedGuide::Ship(g) => db::upsert_ship_guide(conn, g, source),
        ParsedGuide::Port(g) => db::upsert_port_guide(conn, g, source),
    }
}

pub fn read_source(path: &Path) -> Result<String, ImportError> {
    std::fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Files as given; directories expand to their `*.md` files, sorted.
pub fn collect_sources(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = std::fs::read_dir(path)
                .with_context(|| format!("Failed to list {:?}", path))?
                .filter_map(|e| e.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && p.extension().is_some_and(|x| x == "md"))
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportCounts {
    pub ships: usize,
    pub ports: usize,
    pub rejected: usize,
}

impl ImportCounts {
    pub fn print(&self) {
        println!(
            "Imported {} ship guides, {} port guides ({} rejected).",
            self.ships, self.ports, self.rejected
        );
    }
}

struct Rejection {
    kind: GuideKind,
    error: ImportError,
}

fn prepare(path: &Path, kind: Option<GuideKind>) -> Result<ParsedGuide, Rejection> {
    let markdown = read_source(path).map_err(|error| Rejection {
        kind: kind.unwrap_or(GuideKind::Ship),
        error,
    })?;
    parse_and_validate(kind, &markdown).map_err(|error| Rejection {
        kind: kind.unwrap_or_else(|| GuideKind::detect(&markdown)),
        error,
    })
}

/// Parse every file in parallel, then validate and upsert in one transaction.
/// Rejected documents are logged and counted, never fatal.
pub fn import_paths(conn: &Connection, kind: Option<GuideKind>, paths: &[PathBuf]) -> Result<ImportCounts> {
    let files = collect_sources(paths)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .context("invalid progress template")?
            .progress_chars("#>-"),
    );

    let results: Vec<_> = files
        .par_iter()
        .map(|path| (path, prepare(path, kind)))
        .collect();

    let mut counts = ImportCounts::default();
    let tx = conn.unchecked_transaction()?;
    for (path, parsed) in results {
        let source = path.to_string_lossy().into_owned();
        match parsed {
            Ok(guide) => {
                store(&tx, &guide, Some(source.as_str()))?;
                db::log_import(&tx, guide.kind(), Some(source.as_str()), Some(guide.guide().slug()), Outcome::Imported, None)?;
                info!(slug = guide.guide().slug(), kind = guide.kind().as_str(), path = %source, "guide imported");
                match guide.kind() {
                    GuideKind::Ship => counts.ships += 1,
                    GuideKind::Port => counts.ports += 1,
                }
            }
            Err(rejection) => {
                let message = rejection.error.to_string();
                warn!(path = %source, error = %message, "guide rejected");
                eprintln!("Rejected {}: {}", source, message);
                db::log_import(&tx, rejection.kind, Some(source.as_str()), None, Outcome::Rejected, Some(message.as_str()))?;
                counts.rejected += 1;
            }
        }
        pb.inc(1);
    }
    tx.commit()?;

    pb.finish_and_clear();
    Ok(counts)
}
