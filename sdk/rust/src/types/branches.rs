//! Branch and git ref data models.

use serde::{Deserialize, Serialize};

/// One branch in a repository listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name
    pub name: String,
    /// Head commit of the branch
    pub commit: BranchCommit,
    /// Whether branch protection is enabled
    #[serde(default)]
    pub protected: bool,
}

/// Head commit reference of a branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchCommit {
    /// Commit sha
    pub sha: String,
    /// API URL of the commit
    pub url: String,
}

/// A git reference, as returned when creating one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitRef {
    /// Fully qualified ref name (e.g., "refs/heads/feature-x")
    #[serde(rename = "ref")]
    pub ref_name: String,
    /// API URL of the ref
    pub url: String,
    /// The object the ref points at
    pub object: GitObject,
}

/// The target of a git reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitObject {
    /// Object sha
    pub sha: String,
    /// Object kind (e.g., "commit")
    #[serde(rename = "type")]
    pub object_type: String,
    /// API URL of the object
    pub url: String,
}

/// Payload for creating a branch ref.
///
/// The caller resolves `sha` (typically the head of an existing branch)
/// before submitting; the API does not do that resolution.
#[derive(Debug, Clone, Serialize)]
pub struct CreateBranch {
    /// Fully qualified ref name ("refs/heads/<branch>")
    #[serde(rename = "ref")]
    pub ref_name: String,
    /// Commit sha the new ref points at
    pub sha: String,
}
