pub mod download;

#[cfg(test)]
mod download_http_tests;

pub use download::configure_download_routes;
