// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use docsift::corpus::load_corpus;
use docsift::{Document, FileStore, SearchConfig, SearchEngine, TagStore};

mod cli;
use cli::{display, Cli, Commands, TagCommands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output on stdout stays clean.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let store = FileStore::open(&cli.store)
        .with_context(|| format!("opening tag store {}", cli.store.display()))?;
    let tags = TagStore::new(store);

    match cli.command {
        Commands::Search {
            corpus,
            query,
            tags: tag_filter,
            limit,
            snippet_length,
            json,
        } => {
            let mut config = match &cli.config {
                Some(path) => SearchConfig::from_file(path)?,
                None => SearchConfig::default(),
            };
            if let Some(length) = snippet_length {
                config = config.with_snippet_length(length);
                config.validate()?;
            }
            run_search(tags, config, &corpus, &query, &tag_filter, limit, json)
        }
        Commands::Tag { command } => run_tag(&tags, command),
    }
}

#[cfg(feature = "parallel")]
fn load_documents(path: &Path) -> Result<Vec<Document>> {
    use indicatif::{ProgressBar, ProgressStyle};

    if !path.is_dir() {
        return Ok(load_corpus(path)?);
    }

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
        )?
        .progress_chars("━━╸"),
    );
    progress.set_prefix("Loading");
    let docs = docsift::corpus::load_directory_with_progress(path, &progress)?;
    progress.finish_and_clear();
    Ok(docs)
}

#[cfg(not(feature = "parallel"))]
fn load_documents(path: &Path) -> Result<Vec<Document>> {
    Ok(load_corpus(path)?)
}

fn run_search(
    tags: TagStore<FileStore>,
    config: SearchConfig,
    corpus: &Path,
    query: &str,
    tag_filter: &[String],
    limit: usize,
    json: bool,
) -> Result<()> {
    let documents = load_documents(corpus)
        .with_context(|| format!("loading documents from {}", corpus.display()))?;
    tracing::info!(documents = documents.len(), "corpus loaded");

    let engine = SearchEngine::with_config(tags, config);
    let mut results = engine
        .search(&documents, query, tag_filter)
        .context("reading tags for the tag filter")?;
    let total = results.len();
    results.truncate(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        display::print_results(query, &results, total, documents.len());
    }
    Ok(())
}

fn run_tag(tags: &TagStore<FileStore>, command: TagCommands) -> Result<()> {
    match command {
        TagCommands::Add {
            doc_id,
            name,
            color,
        } => {
            let existing = tags.all_tags()?.into_iter().find(|t| t.name == name);
            let tag = existing.unwrap_or_else(|| tags.create_tag(&name, color.as_deref()));
            if tags.tag(&doc_id, tag.clone())? {
                println!("tagged {} with {} ({})", doc_id, tag.name, tag.id);
            } else {
                println!("{} already tagged with {}", doc_id, tag.name);
            }
        }
        TagCommands::Remove { doc_id, tag_id } => {
            if tags.untag(&doc_id, &tag_id)? {
                println!("removed {} from {}", tag_id, doc_id);
            } else {
                println!("{} is not tagged with {}", doc_id, tag_id);
            }
        }
        TagCommands::List { doc_id } => match doc_id {
            Some(doc_id) => {
                let label = format!("TAGS for {}", doc_id);
                display::print_tags(&label, &tags.tags_for(&doc_id)?);
            }
            None => display::print_tags("ALL TAGS", &tags.all_tags()?),
        },
    }
    Ok(())
}
