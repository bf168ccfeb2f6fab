pub mod archive;

pub use archive::{archive_filename, ArchiveError, ArchiveService};
