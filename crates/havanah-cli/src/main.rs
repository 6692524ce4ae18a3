//! Havanah CLI Application
//!
//! Command-line front end of the van-trip planner: the interactive
//! questionnaire, saved trips and detailed van routes.

mod args;
mod cli;
mod renderer;
mod wizard;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use havanah_core::{params::ListTrips, TripBookBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        geocoder_url,
        command,
    } = Args::parse();

    let book = TripBookBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize trip book")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Havanah started");

    let cli = Cli::new(book, renderer, geocoder_url);
    match command {
        Some(Wizard(args)) => cli.run_wizard(&args).await,
        Some(Questions) => cli.show_questions(),
        Some(Trip { command }) => cli.handle_trip_command(command).await,
        Some(Route(args)) => cli.route(&args).await,
        None => cli.list_trips(&ListTrips::default()).await,
    }
}
