// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Two subcommands: `search` to query a collection of documents (optionally
//! narrowed by tag names), and `tag` to manage the tag store that the filter
//! reads from. The tag store is a JSON file; point `--store` (or
//! `DOCSIFT_STORE`) somewhere else to keep several apart.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Search plain-text documents with snippets, highlighting and tag filters",
    version
)]
pub struct Cli {
    /// Tag store file
    #[arg(long, global = true, env = "DOCSIFT_STORE", default_value = ".docsift/tags.json")]
    pub store: PathBuf,

    /// Search config file (JSON: snippetLength, snippetPadding, maxSnippets, markup)
    #[arg(long, global = true, env = "DOCSIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a document collection
    Search {
        /// Directory of text files, or a JSON file with an array of documents
        corpus: PathBuf,

        /// Search query (whitespace-separated terms, case-insensitive)
        query: String,

        /// Only search documents carrying a tag with this name (repeatable, OR)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Override the configured snippet length
        #[arg(long)]
        snippet_length: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Manage document tags
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },
}

#[derive(Subcommand)]
pub enum TagCommands {
    /// Attach a tag to a document, reusing an existing tag with the same name
    Add {
        /// Document id (path relative to the corpus directory, or JSON id)
        doc_id: String,

        /// Tag name
        name: String,

        /// Tag color (hex or name); only used when a new tag is created
        #[arg(long)]
        color: Option<String>,
    },

    /// Detach a tag from a document
    Remove {
        doc_id: String,

        /// Tag id (see `tag list`)
        tag_id: String,
    },

    /// List the tags of one document, or every known tag
    List {
        doc_id: Option<String>,
    },
}
