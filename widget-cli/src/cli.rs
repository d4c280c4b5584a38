use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};

use widget_core::{Config, SearchController, provider_from_config};

use crate::view;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Terminal weather widget")]
pub struct Cli {
    /// Without a subcommand, the interactive search widget starts.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key in the config file.
    Configure,

    /// One-shot lookup: show current conditions for a location and exit.
    Show {
        /// City or location name.
        location: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { location }) => show(location).await,
            None => run_widget().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(location: String) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let mut controller = SearchController::new();
    controller.set_input(location);
    controller.submit(provider.as_ref()).await;

    if let Some(error) = controller.error() {
        anyhow::bail!("{error}");
    }
    if let Some(report) = controller.result() {
        view::render_report(report);
    }

    Ok(())
}

/// The interactive widget: prompt for a city, fetch, render, repeat.
async fn run_widget() -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    let mut controller = SearchController::new();

    println!("Search for the current weather conditions in your city.");
    println!("Press Esc or Ctrl-C to quit.\n");

    loop {
        let line = match Text::new("Enter a city name:").prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read search input"),
        };

        controller.set_input(line);
        println!("  Searching...");
        controller.submit(provider.as_ref()).await;

        if let Some(error) = controller.error() {
            view::render_error(error);
        } else if let Some(report) = controller.result() {
            view::render_report(report);
        }
        println!();
    }

    Ok(())
}
