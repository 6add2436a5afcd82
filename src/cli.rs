use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};

use crate::config::Settings;
use crate::core::session::Session;
use crate::core::words::RandomWordSource;
use crate::logging::{self, Fallback};
use crate::{console, window};

#[derive(Parser)]
#[command(name = "hangterm")]
#[command(about = "🎩 Hangman for the terminal, line by line or full screen")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Play line by line in the console
    Console,
    /// Play in a full-screen window with a drawn gallows
    Window,
    /// List the words rounds are drawn from
    Words,
}

impl Commands {
    fn log_fallback(self) -> Fallback {
        match self {
            Commands::Window => Fallback::Silent,
            Commands::Console | Commands::Words => Fallback::Stderr,
        }
    }
}

pub async fn run_cli(cli: Cli) -> Result<()> {
    let command = match cli.command {
        Some(command) => command,
        None => match select_mode()? {
            Some(command) => command,
            None => {
                println!("👋 Goodbye!");
                return Ok(());
            }
        },
    };

    logging::init(cli.settings.log_file.as_deref(), command.log_fallback())?;
    run_command(command, &cli.settings).await
}

async fn run_command(command: Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::Console => {
            let session = new_session(settings)?;
            console::run(session, settings.color())
        }
        Commands::Window => {
            let session = new_session(settings)?;
            window::run(session).await
        }
        Commands::Words => {
            let list = settings.word_list().context("failed to load the word list")?;
            match &settings.words_file {
                Some(path) => println!("📚 {} words from {}", list.len(), path.display()),
                None => println!("📚 {} built-in words", list.len()),
            }
            println!();
            for word in list.words() {
                println!("  • {} ({} letters)", word, word.len());
            }
            Ok(())
        }
    }
}

fn new_session(settings: &Settings) -> Result<Session<RandomWordSource>> {
    let source = settings
        .word_source()
        .context("failed to set up the word source")?;
    Session::new(source).context("failed to start the first round")
}

/// Interactive menu shown when no subcommand is given; `None` means exit.
fn select_mode() -> Result<Option<Commands>> {
    println!("🎩 Welcome to Hangman!");
    println!();

    let options = [
        "⌨️  Play in the console",
        "🖼️  Play in the window",
        "📚 List the words",
        "🚪 Exit",
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What would you like to do?")
        .items(&options[..])
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Some(Commands::Console),
        1 => Some(Commands::Window),
        2 => Some(Commands::Words),
        _ => None,
    })
}
