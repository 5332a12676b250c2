mod db;
mod error;
mod guide;
mod import;
mod parser;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::warn;

use import::ParsedGuide;
use parser::GuideKind;
use settings::Settings;

#[derive(Parser)]
#[command(name = "guides", about = "Cruise guide Markdown importer")]
struct Cli {
    /// SQLite database (overrides GUIDES_DATABASE_PATH / guides.toml)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one Markdown guide and print it as JSON
    Parse {
        file: PathBuf,
        /// Guide kind (default: detect from section names)
        #[arg(short, long, value_enum)]
        kind: Option<GuideKind>,
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Parse, validate and upsert Markdown guides (files or directories)
    Import {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[arg(short, long, value_enum)]
        kind: Option<GuideKind>,
    },
    /// Print a stored guide document
    Show {
        slug: String,
        #[arg(short, long, value_enum, default_value = "ship")]
        kind: GuideKind,
    },
    /// Stored guides overview table
    List {
        #[arg(short, long, value_enum, default_value = "ship")]
        kind: GuideKind,
        /// Filter by status (draft, published)
        #[arg(short, long)]
        status: Option<String>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
    /// Show store and import statistics
    Stats,
}

fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_filter.as_str().into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let db_path = cli.db.clone().unwrap_or_else(|| settings.database_path.clone());

    let open = || -> anyhow::Result<rusqlite::Connection> {
        let conn = db::connect(&db_path)?;
        db::init_schema(&conn)?;
        Ok(conn)
    };

    let result = match cli.command {
        Commands::Parse { file, kind, compact } => {
            let markdown = import::read_source(&file)?;
            let kind = kind.unwrap_or_else(|| GuideKind::detect(&markdown));
            let parsed = ParsedGuide::parse(kind, &markdown);
            if let Err(e) = import::validate(parsed.guide()) {
                warn!(file = %file.display(), "{}", e);
            }
            let json = if compact {
                serde_json::to_string(&parsed)?
            } else {
                serde_json::to_string_pretty(&parsed)?
            };
            println!("{}", json);
            Ok(())
        }
        Commands::Import { paths, kind } => {
            let conn = open()?;
            let counts = import::import_paths(&conn, kind, &paths)?;
            counts.print();
            if counts.rejected > 0 {
                bail!("{} document(s) rejected", counts.rejected);
            }
            Ok(())
        }
        Commands::Show { slug, kind } => {
            let conn = open()?;
            let doc = db::fetch_document(&conn, kind, &slug)?
                .with_context(|| format!("No {} guide with slug '{}'", kind.as_str(), slug))?;
            let value: serde_json::Value = serde_json::from_str(&doc)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Commands::List { kind, status, limit } => {
            let conn = open()?;
            let rows = db::list_guides(&conn, kind, status.as_deref(), limit)?;
            if rows.is_empty() {
                println!("No {} guides found.", kind.as_str());
                return Ok(());
            }

            let group = match kind {
                GuideKind::Ship => "Line",
                GuideKind::Port => "Country",
            };
            println!(
                "{:>3} | {:<24} | {:<24} | {:<18} | {:<9} | {:<4} | {:<20}",
                "#", "Slug", "Name", group, "Status", "Feat", "Updated"
            );
            println!("{}", "-".repeat(118));

            for (i, r) in rows.iter().enumerate() {
                println!(
                    "{:>3} | {:<24} | {:<24} | {:<18} | {:<9} | {:<4} | {:<20}",
                    i + 1,
                    truncate(&r.slug, 24),
                    truncate(&r.name, 24),
                    truncate(&r.group, 18),
                    r.status,
                    if r.featured { "*" } else { "" },
                    truncate(&r.updated_at, 20),
                );
            }

            println!("\n{} {} guides", rows.len(), kind.as_str());
            Ok(())
        }
        Commands::Stats => {
            let conn = open()?;
            let s = db::get_stats(&conn)?;
            println!("Ship guides: {}", s.ship_guides);
            println!("Port guides: {}", s.port_guides);
            println!("Published:   {}", s.published);
            println!("Featured:    {}", s.featured);
            println!("Imported:    {}", s.imported);
            println!("Rejected:    {}", s.rejected);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
