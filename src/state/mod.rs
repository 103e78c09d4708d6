// Review session state management
// Handles the agenda-item model and the session store

pub mod models;
pub mod store;

pub use models::{AgendaItem, ReviewStatus};
pub use store::ReviewStore;
