//! Display formatting for wizard screens, itineraries and saved trips.
//!
//! Domain models implement [`std::fmt::Display`] in [`models`]; collections
//! and operation outcomes get newtype wrappers so that empty lists and
//! confirmations read the same everywhere. All output is markdown, rendered
//! by the CLI's terminal renderer.
//!
//! - [`collections`]: [`TripSummaries`], [`Itineraries`], [`VanWarnings`]
//! - [`results`]: [`CreateResult`], [`DeleteResult`]
//! - [`status`]: [`OperationStatus`]
//! - [`datetime`]: [`LocalDateTime`]
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use havanah_core::{display::Itineraries, results::StaticCatalog};
//!
//! let itineraries = Itineraries(StaticCatalog::new().itineraries().to_vec());
//! let output = itineraries.to_string();
//! assert!(output.contains("Côte Méditerranéenne"));
//! assert!(output.contains("Montpellier → Palavas → Sète → Cap d'Agde"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Itineraries, TripSummaries, VanWarnings};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;
