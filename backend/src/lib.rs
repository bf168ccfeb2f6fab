//! HubDeck backend
//!
//! Server-side companion to the HubDeck dashboard. The browser cannot
//! reliably follow GitHub's redirect to a binary archive while carrying an
//! authorization header, so this service re-issues the zipball fetch with
//! the caller's credential and streams the result back.

pub mod config;
pub mod error;
pub mod handlers;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use services::{archive_filename, ArchiveService};

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub archive: ArchiveService,
}
