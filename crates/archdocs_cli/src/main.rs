//! Command-line front end over `archdocs_core`.
//!
//! # Responsibility
//! - Expose resolution, search, notes, routing and theme operations.
//! - Keep output line-oriented so it can be diffed in scripts.

use anyhow::{bail, Context, Result};
use archdocs_core::affordance::doc_links_for;
use archdocs_core::model::note::format_note_date;
use archdocs_core::navigation::routes::{path_for, section_for_path};
use archdocs_core::notes::view::{changelog_entries, DEFAULT_NOTES_PER_PAGE};
use archdocs_core::search::component_search::result_summary;
use archdocs_core::{
    core_version, default_log_level, init_logging, load_theme, parse_diagram, save_theme,
    search_components, ComponentRegistry, ComponentSearchQuery, DetailView, LabelMapping,
    LabelResolver, MatchPolicy, MemoryPreferenceStore, NavigationController, NoteRecord,
    NotesLoader, NotesPager, PreferenceStore, SqlitePreferenceStore, StaticNoteSource, Theme,
};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "archdocs", version, about = "Architecture documentation browser")]
struct Cli {
    /// Log level (trace|debug|info|warn|error); defaults per build mode
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,
    /// SQLite file holding UI preferences; in-memory when omitted
    #[arg(long, global = true, value_name = "PATH")]
    prefs_db: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate version and dataset summary
    Info,
    /// Resolve a diagram label to a component id
    Resolve {
        label: String,
        /// Prefer the longest matching key over declaration order
        #[arg(long)]
        longest_key: bool,
    },
    /// Search components by id, tag or description
    Search {
        query: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show notes for a component, one page at a time
    Notes {
        id: String,
        /// One-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show changelog entries, newest first
    Changelog {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Map a path to its section and describe the page
    Route { path: String },
    /// Check that clickable diagram nodes resolve to their targets
    Diagrams,
    /// Read or change the theme preference
    Theme {
        /// New value (dark|light|system); prints the current value when omitted
        value: Option<String>,
        /// Treat the platform as preferring dark mode
        #[arg(long)]
        system_dark: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let dir = dir.to_str().context("log directory must be valid UTF-8")?;
        init_logging(level, dir).context("failed to start logging")?;
    }
    info!("event=cli_start module=cli status=ok version={}", core_version());

    let registry = ComponentRegistry::builtin();
    match cli.command {
        Commands::Info => {
            println!("archdocs_core version={}", core_version());
            println!("app={}", registry.app_name());
            println!("components={}", registry.len());
            for (component_id, dependency) in registry.unresolved_dependencies() {
                println!("external_dependency component={component_id} name={dependency:?}");
            }
        }
        Commands::Resolve { label, longest_key } => {
            let policy = if longest_key {
                MatchPolicy::LongestKey
            } else {
                MatchPolicy::FirstMatch
            };
            let resolver = LabelResolver::with_policy(LabelMapping::builtin(), policy);
            match resolver.resolve(label.as_str()) {
                Some(id) => println!("{id}"),
                None => bail!("no component matches label {label:?}"),
            }
        }
        Commands::Search { query, limit } => {
            let mut request = ComponentSearchQuery::new(query.as_str());
            if let Some(limit) = limit {
                request = request.with_limit(limit);
            }
            let hits = search_components(registry, &request);
            println!("{}", result_summary(query.as_str(), hits.len()));
            for hit in hits {
                println!("{} icon={:?} matched={:?}", hit.component_id, hit.icon, hit.matched);
            }
        }
        Commands::Notes { id, page } => {
            let loader = NotesLoader::new(StaticNoteSource::builtin());
            let notes = loader.load_notes(id.as_str()).await?;
            if notes.is_empty() {
                println!("no notes for {id}");
                return Ok(());
            }
            let mut pager = NotesPager::new(notes.len(), DEFAULT_NOTES_PER_PAGE);
            for _ in 1..page {
                if !pager.next() {
                    break;
                }
            }
            for note in pager.items(&notes) {
                print_note(note);
            }
            println!("page {}", pager.label());
        }
        Commands::Changelog { limit } => {
            let loader = NotesLoader::new(StaticNoteSource::builtin());
            let notes = loader.load_changelog().await?;
            for note in changelog_entries(&notes, limit) {
                print_note(note);
            }
        }
        Commands::Route { path } => {
            let mut controller = NavigationController::new();
            controller.navigate(section_for_path(path.as_str()));
            println!("section={} path={}", controller.active(), path_for(controller.active()));
            match controller.detail(registry) {
                DetailView::Roadmap => println!("{}", registry.roadmap().description),
                DetailView::Diagrams => {
                    for (key, diagram) in registry.diagrams() {
                        println!("{key}: {}", diagram.title);
                    }
                }
                DetailView::Changelog => println!("changelog"),
                DetailView::Component(component) => {
                    println!("{}: {}", component.display_name(), component.description);
                    for link in doc_links_for(component) {
                        println!("  {} <{}>", link.title, link.url);
                    }
                }
                DetailView::Empty => println!("no component named {}", controller.active_id()),
            }
        }
        Commands::Diagrams => {
            let resolver = LabelResolver::builtin();
            let mut mismatches = 0;
            for (key, diagram) in registry.diagrams() {
                for mismatch in parse_diagram(diagram.graph.as_str()).label_mismatches(&resolver) {
                    mismatches += 1;
                    println!(
                        "{key} node={} label={:?} target={} resolved={:?}",
                        mismatch.node_id, mismatch.label, mismatch.click_target, mismatch.resolved
                    );
                }
            }
            if mismatches > 0 {
                bail!("{mismatches} diagram node(s) resolve to the wrong component");
            }
            println!("all clickable diagram nodes resolve to their targets");
        }
        Commands::Theme { value, system_dark } => {
            let store: Box<dyn PreferenceStore> = match &cli.prefs_db {
                Some(path) => Box::new(
                    SqlitePreferenceStore::open(path)
                        .with_context(|| format!("failed to open {}", path.display()))?,
                ),
                None => Box::new(MemoryPreferenceStore::new()),
            };
            if let Some(value) = value {
                let Some(theme) = Theme::parse(value.as_str()) else {
                    bail!("unknown theme {value:?}; expected dark|light|system");
                };
                save_theme(store.as_ref(), theme)?;
            }
            let theme = load_theme(store.as_ref())?;
            println!("theme={theme} applied={}", theme.applied(system_dark).as_str());
        }
    }
    Ok(())
}

fn print_note(note: &NoteRecord) {
    println!("{} ({}, {})", note.title, note.author, format_note_date(note.date.as_str()));
    println!("  {}", note.content);
}
