use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{RouteArgs, TripCommands, WizardArgs};

/// Plan a van trip from the terminal
///
/// Havanah walks you through a short questionnaire (dates, departure, van,
/// companions, tastes), proposes itineraries that match and keeps the trips
/// you pick. Saved trips can be listed, shown and deleted, and any proposed
/// itinerary can be turned into a detailed van route.
#[derive(Parser)]
#[command(version, about, name = "havanah")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/havanah/trips.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Base URL of the Nominatim instance used for place lookups
    #[arg(long, global = true)]
    pub geocoder_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Havanah CLI
///
/// Without a command, saved trips are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Answer the questionnaire and pick an itinerary
    #[command(alias = "w")]
    Wizard(WizardArgs),
    /// Print every question with its options
    #[command(alias = "q")]
    Questions,
    /// Manage saved trips
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Compute a detailed van route for a proposed itinerary
    #[command(alias = "r")]
    Route(RouteArgs),
}
