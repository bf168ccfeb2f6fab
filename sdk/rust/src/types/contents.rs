//! Repository content data models.

use serde::{Deserialize, Serialize};

/// Kind of a content entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    File,
    Dir,
    Symlink,
    Submodule,
}

/// One item in a directory listing, or a single fetched file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    /// Entry name (last path component)
    pub name: String,
    /// Full path within the repository
    pub path: String,
    /// Blob sha
    pub sha: String,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
    /// API URL of the entry
    pub url: String,
    /// Web URL of the entry
    pub html_url: Option<String>,
    /// Raw download URL (absent for directories)
    pub download_url: Option<String>,
    /// Entry kind
    #[serde(rename = "type")]
    pub entry_type: ContentType,
    /// Inline content (present on single-file fetches only)
    pub content: Option<String>,
    /// Encoding of the inline content (e.g., "base64")
    pub encoding: Option<String>,
}

/// Result of a content fetch.
///
/// The contents endpoint is polymorphic: a directory path yields a JSON
/// array, a file path a single object. The two shapes are dispatched into
/// explicit variants at deserialization so callers must handle both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Contents {
    /// Ordered entries of a directory
    Directory(Vec<ContentEntry>),
    /// A single file, possibly with inline content
    File(Box<ContentEntry>),
}

impl Contents {
    /// The single file entry, if this fetch hit a file.
    #[must_use]
    pub fn as_file(&self) -> Option<&ContentEntry> {
        match self {
            Self::File(entry) => Some(entry),
            Self::Directory(_) => None,
        }
    }

    /// The directory entries, if this fetch hit a directory.
    #[must_use]
    pub fn as_directory(&self) -> Option<&[ContentEntry]> {
        match self {
            Self::Directory(entries) => Some(entries),
            Self::File(_) => None,
        }
    }
}

/// Payload for creating or updating a file.
#[derive(Debug, Clone, Serialize)]
pub struct UploadFile {
    /// Commit message
    pub message: String,
    /// Base64-encoded file content
    pub content: String,
    /// Target branch (repository default branch when omitted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Current blob sha, required when updating an existing file.
    /// Omission on update is rejected upstream, not detected locally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

/// Response of a file create/update call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileCommit {
    /// The written entry
    pub content: Option<ContentEntry>,
    /// The commit that recorded the change
    pub commit: CommitInfo,
}

/// Commit reference in a file-commit response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Commit sha
    pub sha: String,
    /// Web URL of the commit
    pub html_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_shape_yields_entries() {
        let json = r#"[
            {
                "name": "src",
                "path": "src",
                "sha": "aaa",
                "size": 0,
                "url": "https://api.github.com/repos/octocat/demo/contents/src",
                "html_url": "https://github.com/octocat/demo/tree/main/src",
                "download_url": null,
                "type": "dir"
            },
            {
                "name": "README.md",
                "path": "README.md",
                "sha": "bbb",
                "size": 120,
                "url": "https://api.github.com/repos/octocat/demo/contents/README.md",
                "html_url": "https://github.com/octocat/demo/blob/main/README.md",
                "download_url": "https://raw.githubusercontent.com/octocat/demo/main/README.md",
                "type": "file"
            }
        ]"#;

        let contents: Contents = serde_json::from_str(json).expect("Should deserialize");
        let entries = contents.as_directory().expect("should be a directory");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entry_type, ContentType::Dir);
        assert!(contents.as_file().is_none());
    }

    #[test]
    fn test_file_shape_yields_single_entry() {
        let json = r#"{
            "name": "README.md",
            "path": "README.md",
            "sha": "bbb",
            "size": 120,
            "url": "https://api.github.com/repos/octocat/demo/contents/README.md",
            "html_url": "https://github.com/octocat/demo/blob/main/README.md",
            "download_url": "https://raw.githubusercontent.com/octocat/demo/main/README.md",
            "type": "file",
            "content": "aGVsbG8gd29ybGQ=",
            "encoding": "base64"
        }"#;

        let contents: Contents = serde_json::from_str(json).expect("Should deserialize");
        let entry = contents.as_file().expect("should be a file");
        assert_eq!(entry.encoding.as_deref(), Some("base64"));
        assert!(contents.as_directory().is_none());
    }

    #[test]
    fn test_upload_file_omits_absent_fields() {
        let payload = UploadFile {
            message: "add file".to_string(),
            content: "aGVsbG8=".to_string(),
            branch: None,
            sha: None,
        };

        let json = serde_json::to_value(&payload).expect("Should serialize");
        assert!(json.get("branch").is_none());
        assert!(json.get("sha").is_none());
    }
}
