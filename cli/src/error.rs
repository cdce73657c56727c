use std::path::PathBuf;

use campus_api::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("api request failed: {0}")]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("expected KEY=VALUE, got `{0}`")]
    MalformedField(String),
    #[error("unknown staff field `{0}`")]
    UnknownField(String),
    #[error("invalid value for `{field}`: `{value}`")]
    InvalidField { field: String, value: String },
    #[error("missing required staff field `{0}`")]
    MissingField(&'static str),
}
