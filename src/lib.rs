//! Advisor Prep Client Library
//!
//! Client-side state and HTTP plumbing for the Advisor Prep service:
//! list clients, manage their documents, request AI-generated draft
//! agendas, and track human approve/discard decisions on each item.
//!
//! The two main entry points are [`PrepApiClient`] (typed wrappers over
//! the four REST endpoints) and [`ReviewStore`] (all session state plus
//! the review workflow). A store owns its client:
//!
//! ```no_run
//! use advisor_prep_client::{ApiConfig, PrepApiClient, ReviewStore};
//!
//! # async fn run() -> Result<(), advisor_prep_client::ApiError> {
//! let mut store = ReviewStore::new(PrepApiClient::new(ApiConfig::from_env()));
//! store.load_clients().await;
//! store.select_client("acme");
//! store.generate_prep().await;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
/// Review session state management
///
/// Holds the client list, selected client, agenda items under review,
/// and the loading/error flags the UI renders from.
pub mod state;

pub use api::PrepApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use state::{AgendaItem, ReviewStatus, ReviewStore};
