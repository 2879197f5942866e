use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimplifierError {
    #[error("Please choose a .txt file")]
    NoFileSelected,
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Server error: {body}")]
    Server { status: u16, body: String },
    #[error("Invalid response: {0}")]
    Decode(String),
    #[error("Invalid config: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SimplifierError {
    /// Text shown to the user in a blocking notification.
    ///
    /// File selection problems are shown as-is; everything else is reported
    /// as a failed request with the underlying message appended.
    pub fn notification(&self) -> String {
        match self {
            Self::NoFileSelected | Self::FileRead { .. } => self.to_string(),
            _ => format!("Request failed: {self}"),
        }
    }

    /// HTTP status of a server-side failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimplifierError>;
