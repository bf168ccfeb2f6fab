//! Download passthrough handlers
//!
//! HTTP handlers for relaying repository zip archives.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::{archive_filename, ArchiveError};
use crate::AppState;

/// Branch used when the caller names none.
const DEFAULT_BRANCH: &str = "main";

/// Query parameters for the download endpoint
#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub branch: Option<String>,
}

/// GET /api/download
///
/// Relay a repository zip archive from GitHub using the caller's
/// credential. `owner` and `repo` are required; `branch` defaults to
/// `main`. Input is validated before any upstream request goes out, so a
/// bad request never costs an upstream call.
pub async fn download_archive(
    state: web::Data<AppState>,
    query: web::Query<DownloadQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    let owner = query
        .owner
        .filter(|owner| !owner.is_empty())
        .ok_or_else(|| AppError::Validation("owner and repo are required".to_string()))?;
    let repo = query
        .repo
        .filter(|repo| !repo.is_empty())
        .ok_or_else(|| AppError::Validation("owner and repo are required".to_string()))?;
    let branch = query
        .branch
        .filter(|branch| !branch.is_empty())
        .unwrap_or_else(|| DEFAULT_BRANCH.to_string());

    let authorization = req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization header is required".to_string()))?;

    let bytes = state
        .archive
        .fetch_zipball(&owner, &repo, &branch, authorization)
        .await
        .map_err(map_archive_error)?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        archive_filename(&repo, &branch)
    );

    Ok(HttpResponse::Ok()
        .content_type("application/zip")
        .insert_header(("Content-Disposition", disposition))
        .body(bytes))
}

/// Map archive service errors to application errors
fn map_archive_error(e: ArchiveError) -> AppError {
    match e {
        ArchiveError::Upstream { status, body } => AppError::Upstream { status, body },
        ArchiveError::Transport(msg) | ArchiveError::BaseUrl(msg) | ArchiveError::Client(msg) => {
            AppError::Internal(msg)
        }
    }
}

/// Configure download routes
pub fn configure_download_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/download", web::get().to(download_archive));
}
