//! Single file (blob) download.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use super::client::GiteeClient;
use super::config::{ClientConfig, Field};
use super::error::{GiteeError, Result};
use super::resource::Resource;

const BLOB: Resource = Resource {
    operation: "get_file",
    label: "file content",
    required: &[Field::Owner, Field::Project, Field::Sha],
    path: |c| {
        format!(
            "/repos/{}/{}/git/blobs/{}",
            c.owner_str(),
            c.project_str(),
            c.sha_str()
        )
    },
};

/// Decode the base64 `content` field of a blob response.
///
/// The API wraps the payload with newlines; all ASCII whitespace is ignored.
fn decode_content(response: &Value) -> Option<String> {
    let content = response.get("content")?.as_str()?;
    let compact: String = content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    match STANDARD.decode(compact) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            tracing::error!("Blob content is not valid base64: {e}");
            None
        }
    }
}

impl GiteeClient {
    /// Download the blob identified by `config.sha` and return its text.
    ///
    /// Requires `owner`, `project` and `sha` (the blob id). Returns an empty
    /// string when the response carries no decodable content. When
    /// `config.save` is set, the text is also written to
    /// `<config.output_dir>/<sha>`.
    pub async fn get_file(&self, config: &ClientConfig) -> Result<String> {
        let response = self.fetch(&BLOB, config).await?;

        let Some(text) = decode_content(&response) else {
            tracing::info!("There is no {} for blob [{}]", BLOB.label, config.sha_str());
            return Ok(String::new());
        };

        tracing::info!(
            "File [{}] received: {} characters",
            config.sha_str(),
            text.chars().count()
        );
        if config.more_debug {
            tracing::debug!("Decoded file content:\n{text}");
        }

        if config.save {
            let path = save_path(config)?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, &text)?;
            tracing::info!("File saved to [{}]", path.display());
        }

        Ok(text)
    }
}

/// `<output_dir>/<file name of sha>`; ids without a usable file name are rejected.
fn save_path(config: &ClientConfig) -> Result<PathBuf> {
    let sha = config.sha_str();
    match Path::new(sha).file_name() {
        Some(name) => Ok(config.output_dir.join(name)),
        None => Err(GiteeError::InvalidBlobId(sha.to_string())),
    }
}
