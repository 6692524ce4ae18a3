//! Command handlers and their clap argument wrappers.
//!
//! Each subcommand has an argument struct with clap derives and a `From`
//! conversion into the matching `havanah_core::params` type, so the core
//! never depends on clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TripBook / TripSession
//! ```
//!
//! [`Cli`] runs the commands and hands every result to the
//! [`TerminalRenderer`] through the core's `Display` implementations.

use std::{env, io};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use havanah_core::{
    display::{Itineraries, OperationStatus, TripSummaries, VanWarnings},
    params::{Id, ListTrips},
    results::check_van_restrictions,
    wizard::QUESTIONS,
    GraphHopperRouter, NominatimGeocoder, Router, StaticCatalog, TripBook, TripSessionBuilder,
    VanRoutingOptions, Vehicle,
};
use jiff::civil::Date;
use log::info;

use crate::{renderer::TerminalRenderer, wizard};

/// Environment variable holding the GraphHopper API key.
pub const GRAPHHOPPER_KEY_VAR: &str = "GRAPHHOPPER_API_KEY";

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Answer the questionnaire interactively
///
/// Questions are read from standard input one line at a time. An empty line
/// moves to the next question, `b` goes back and `q` quits.
#[derive(Args)]
pub struct WizardArgs {
    /// Do not save the itinerary picked at the end
    #[arg(long, help = "Pick an itinerary without saving it as a trip")]
    pub no_save: bool,
}

/// List saved trips
///
/// Most recent trips come first. With `--from` and `--to`, only trips whose
/// dates overlap that period are listed, earliest departure first.
#[derive(Args)]
pub struct ListTripsArgs {
    /// Maximum number of trips to show
    #[arg(
        short,
        long,
        conflicts_with = "from",
        help = "Maximum number of trips to show"
    )]
    pub limit: Option<u32>,
    #[arg(long, requires = "to", help = "First day of the period (YYYY-MM-DD)")]
    pub from: Option<Date>,
    #[arg(long, requires = "from", help = "Last day of the period (YYYY-MM-DD)")]
    pub to: Option<Date>,
}

impl From<ListTripsArgs> for ListTrips {
    fn from(val: ListTripsArgs) -> Self {
        ListTrips { limit: val.limit }
    }
}

/// Show a saved trip with the preferences it was planned from
#[derive(Args)]
pub struct ShowTripArgs {
    #[arg(help = "Unique identifier of the trip to show")]
    pub id: u64,
}

impl From<ShowTripArgs> for Id {
    fn from(val: ShowTripArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a saved trip
///
/// Deletion is permanent and requires `--confirm`.
#[derive(Args)]
pub struct DeleteTripArgs {
    #[arg(help = "Unique identifier of the trip to delete")]
    pub id: u64,
    #[arg(long, help = "Confirm the permanent deletion of the trip")]
    pub confirm: bool,
}

impl From<&DeleteTripArgs> for Id {
    fn from(val: &DeleteTripArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// List saved trips
    #[command(alias = "ls")]
    List(ListTripsArgs),
    /// Show a saved trip
    #[command(alias = "s")]
    Show(ShowTripArgs),
    /// Delete a saved trip
    #[command(alias = "rm")]
    Delete(DeleteTripArgs),
}

/// Compute a detailed van route for a proposed itinerary
///
/// The route goes through the itinerary's departure, highlights and
/// destination. A GraphHopper API key is required, either with `--api-key`
/// or in the GRAPHHOPPER_API_KEY environment variable.
#[derive(Args)]
pub struct RouteArgs {
    #[arg(help = "Identifier of the proposed itinerary (see `havanah wizard`)")]
    pub itinerary_id: u32,
    #[arg(long, help = "GraphHopper API key, overrides GRAPHHOPPER_API_KEY")]
    pub api_key: Option<String>,
    #[arg(long, value_enum, default_value_t = VehicleArg::Van, help = "Routing profile")]
    pub vehicle: VehicleArg,
    #[arg(long, help = "Avoid toll roads")]
    pub avoid_tolls: bool,
    #[arg(long, help = "Avoid motorways")]
    pub avoid_highways: bool,
    #[arg(long, help = "Vehicle height in metres")]
    pub height: Option<f64>,
    #[arg(long, help = "Vehicle weight in tonnes")]
    pub weight: Option<f64>,
    #[arg(long, help = "Vehicle width in metres")]
    pub width: Option<f64>,
}

impl From<&RouteArgs> for VanRoutingOptions {
    fn from(val: &RouteArgs) -> Self {
        VanRoutingOptions {
            vehicle: val.vehicle.into(),
            avoid_tolls: val.avoid_tolls,
            avoid_highways: val.avoid_highways,
            height: val.height,
            weight: val.weight,
            width: val.width,
        }
    }
}

/// Command-line representation of the routing profiles
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum VehicleArg {
    Van,
    Car,
    Truck,
}

impl From<VehicleArg> for Vehicle {
    fn from(val: VehicleArg) -> Self {
        match val {
            VehicleArg::Van => Vehicle::Van,
            VehicleArg::Car => Vehicle::Car,
            VehicleArg::Truck => Vehicle::Truck,
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Runs commands against a trip book and renders their output.
pub struct Cli {
    book: TripBook,
    renderer: TerminalRenderer,
    geocoder_url: Option<String>,
}

impl Cli {
    pub fn new(book: TripBook, renderer: TerminalRenderer, geocoder_url: Option<String>) -> Self {
        Self {
            book,
            renderer,
            geocoder_url,
        }
    }

    /// Runs the questionnaire on standard input.
    pub async fn run_wizard(&self, args: &WizardArgs) -> Result<()> {
        let geocoder = match &self.geocoder_url {
            Some(url) => NominatimGeocoder::with_base_url(url.as_str()),
            None => NominatimGeocoder::new(),
        }
        .context("Failed to create geocoder")?;

        let mut builder = TripSessionBuilder::new().with_geocoder(geocoder);
        if !args.no_save {
            builder = builder.with_trip_book(self.book.clone());
        }
        let session = builder.build().context("Failed to start the questionnaire")?;

        info!("Questionnaire started");
        wizard::run(&session, &self.renderer, io::stdin().lock()).await
    }

    /// Prints every question of the questionnaire.
    pub fn show_questions(&self) -> Result<()> {
        for question in &QUESTIONS {
            self.renderer.show(question)?;
            self.renderer.render("\n")?;
        }
        Ok(())
    }

    pub async fn handle_trip_command(&self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::List(args) => match (args.from, args.to) {
                (Some(from), Some(to)) => self.list_trips_between(from, to).await,
                _ => self.list_trips(&args.into()).await,
            },
            TripCommands::Show(args) => self.show_trip(&args.into()).await,
            TripCommands::Delete(args) => self.delete_trip(&args).await,
        }
    }

    pub async fn list_trips(&self, params: &ListTrips) -> Result<()> {
        let summaries = self
            .book
            .list_trips_summary(params)
            .await
            .context("Failed to list trips")?;
        self.renderer.show(&summaries)
    }

    async fn list_trips_between(&self, from: Date, to: Date) -> Result<()> {
        let trips = self
            .book
            .trips_between(from, to)
            .await
            .context("Failed to list trips for the period")?;
        let summaries = TripSummaries(trips.iter().map(Into::into).collect());
        self.renderer.show(&summaries)
    }

    async fn show_trip(&self, params: &Id) -> Result<()> {
        let trip = self
            .book
            .get_trip(params)
            .await
            .context("Failed to load trip")?;
        match trip {
            Some(trip) => self.renderer.show(&trip),
            None => self.renderer.show(&OperationStatus::failure(format!(
                "Trip with ID {} not found",
                params.id
            ))),
        }
    }

    async fn delete_trip(&self, args: &DeleteTripArgs) -> Result<()> {
        if !args.confirm {
            return self.renderer.show(&OperationStatus::failure(format!(
                "Deleting trip {} is permanent. Run again with --confirm to proceed.",
                args.id
            )));
        }
        let result = self
            .book
            .delete_trip_result(&args.into())
            .await
            .context("Failed to delete trip")?;
        self.renderer.show(&result)
    }

    /// Fetches a detailed route for one of the catalog itineraries.
    pub async fn route(&self, args: &RouteArgs) -> Result<()> {
        let catalog = StaticCatalog::new();
        let Some(itinerary) = catalog.get(args.itinerary_id) else {
            let known = Itineraries(catalog.itineraries().to_vec());
            self.renderer.show(&OperationStatus::failure(format!(
                "Itinerary with ID {} not found",
                args.itinerary_id
            )))?;
            return self.renderer.show(&known);
        };

        let api_key = match args.api_key.clone() {
            Some(key) => key,
            None => match env::var(GRAPHHOPPER_KEY_VAR) {
                Ok(key) if !key.trim().is_empty() => key,
                _ => bail!(
                    "A GraphHopper API key is required: pass --api-key or set {GRAPHHOPPER_KEY_VAR}"
                ),
            },
        };

        let router = GraphHopperRouter::new(api_key).context("Failed to create router")?;
        let options = VanRoutingOptions::from(args);
        let route = router
            .route(&itinerary.waypoints(), &options)
            .await
            .with_context(|| format!("Failed to compute route for '{}'", itinerary.title))?;
        let warnings = VanWarnings(check_van_restrictions(&route));

        self.renderer
            .render(&format!("# {}. {}\n\n", itinerary.id, itinerary.title))?;
        self.renderer.show(&route)?;
        self.renderer.render("\n")?;
        self.renderer.show(&warnings)
    }
}
