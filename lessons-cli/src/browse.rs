//! Interactive catalog browser
//!
//! Reads one command per line from stdin and drives a [`CatalogStore`].
//! The screen is re-rendered whenever the store publishes a change.

use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use lessons_core::CatalogStore;

use crate::render;
use crate::theme_cli;
use crate::AppContext;

const HELP: &str = "\
Commands:
  <number>   open a unit
  /<text>    search lessons (empty text clears the search)
  back       return to the unit list
  clear      clear the search
  theme      toggle light/dark theme
  help       show this help
  quit       leave the browser";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    Select(u32),
    Search(String),
    Back,
    Clear,
    Theme,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// What the loop should do after applying an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to print beyond a possible re-render
    Continue,
    /// Print a message to the user
    Message(String),
    ToggleTheme,
    Quit,
}

impl BrowseInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return BrowseInput::Empty;
        }
        if let Some(query) = line.strip_prefix('/') {
            return BrowseInput::Search(query.trim().to_string());
        }
        if let Ok(number) = line.parse::<u32>() {
            return BrowseInput::Select(number);
        }
        match line.to_ascii_lowercase().as_str() {
            "back" | "b" => BrowseInput::Back,
            "clear" | "c" => BrowseInput::Clear,
            "theme" | "t" => BrowseInput::Theme,
            "help" | "h" | "?" => BrowseInput::Help,
            "quit" | "exit" | "q" => BrowseInput::Quit,
            _ => BrowseInput::Unknown(line.to_string()),
        }
    }
}

/// Apply one input to the store
///
/// Every `/text` line is a submitted search, so any non-empty text runs.
/// Empty search text clears the current search.
pub fn apply(store: &mut CatalogStore, input: BrowseInput) -> Outcome {
    match input {
        BrowseInput::Select(number) => match store.select_unit(number) {
            Ok(_) => Outcome::Continue,
            Err(e) => Outcome::Message(e.to_string()),
        },
        BrowseInput::Search(query) if query.is_empty() => {
            store.clear_search();
            Outcome::Continue
        }
        BrowseInput::Search(query) => {
            store.search(&query);
            Outcome::Continue
        }
        BrowseInput::Back => {
            store.show_units();
            Outcome::Continue
        }
        BrowseInput::Clear => {
            store.clear_search();
            Outcome::Continue
        }
        BrowseInput::Theme => Outcome::ToggleTheme,
        BrowseInput::Help => Outcome::Message(HELP.to_string()),
        BrowseInput::Quit => Outcome::Quit,
        BrowseInput::Empty => Outcome::Continue,
        BrowseInput::Unknown(line) => Outcome::Message(format!("Unknown command '{line}', type 'help'")),
    }
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

pub async fn run(ctx: &mut AppContext) -> Result<()> {
    let loaded = ctx.load_catalog().await;
    let mut store = CatalogStore::new(loaded.catalog);
    let mut changes = store.subscribe();

    println!("{}", theme_cli::describe(ctx.settings.theme));
    println!("{}\n", render::view(&store));
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = BrowseInput::parse(&line);
        tracing::trace!(?input, "Browse input");

        match apply(&mut store, input) {
            Outcome::Continue => {}
            Outcome::Message(message) => println!("{message}"),
            Outcome::ToggleTheme => {
                ctx.settings.theme = ctx.settings.theme.toggled();
                // The session keeps the new theme even if it cannot be persisted
                if let Err(e) = ctx.save_settings() {
                    tracing::warn!("Failed to save theme: {:#}", e);
                }
                println!("{}", theme_cli::describe(ctx.settings.theme));
            }
            Outcome::Quit => break,
        }

        if changes.has_changed()? {
            changes.mark_unchanged();
            println!("{}\n", render::view(&store));
        }
        prompt()?;
    }

    Ok(())
}
