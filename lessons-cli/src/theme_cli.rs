//! Colour theme preference commands

use anyhow::Result;
use clap::Subcommand;

use lessons_core::Theme;

use crate::AppContext;

#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Print the current theme (default)
    Show,

    /// Switch between light and dark
    Toggle,

    /// Set the theme explicitly
    Set {
        /// light or dark
        theme: Theme,
    },
}

pub fn execute(ctx: &mut AppContext, command: Option<ThemeCommand>) -> Result<()> {
    match command.unwrap_or(ThemeCommand::Show) {
        ThemeCommand::Show => {}
        ThemeCommand::Toggle => {
            ctx.settings.theme = ctx.settings.theme.toggled();
            ctx.save_settings()?;
        }
        ThemeCommand::Set { theme } => {
            ctx.settings.theme = theme;
            ctx.save_settings()?;
        }
    }

    println!("{}", describe(ctx.settings.theme));
    Ok(())
}

/// One-line theme summary with the toggle glyph
pub fn describe(theme: Theme) -> String {
    format!("Theme: {theme} {}", theme.toggle_glyph())
}
