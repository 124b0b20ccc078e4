//! Gitee API error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GiteeError {
    #[error("Unsupported request type `{0}`: you can define request type `GET` or `POST`")]
    InvalidArgument(String),

    #[error("All the variables: {} must be defined for using `{operation}`", format_fields(.fields))]
    MissingConfiguration {
        operation: &'static str,
        fields: Vec<&'static str>,
    },

    #[error("Blob id `{0}` cannot be used as a file name")]
    InvalidBlobId(String),

    #[error("Network request failed")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to write downloaded file")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GiteeError>;

/// Render required field names as "`a`, `b` and `c`".
fn format_fields(fields: &[&'static str]) -> String {
    let quoted: Vec<String> = fields.iter().map(|f| format!("`{f}`")).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
    }
}
