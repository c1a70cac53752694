use thiserror::Error;

#[derive(Error, Debug)]
pub enum FwctlError {
    #[error("Cannot determine working directory: {0}")]
    Environment(#[source] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Submission(#[from] SubmitError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// The object exists server-side; only printing it failed.
    #[error("{resource} was created, but printing the result failed: {source}")]
    CreatedButNotRendered {
        resource: String,
        #[source]
        source: RenderError,
    },

    #[error("Malformed object: {0}")]
    MalformedObject(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Failure of a remote create call.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("{}", already_exists(.resource, .name, .message))]
    Conflict {
        resource: String,
        name: String,
        message: String,
    },

    #[error("{resource} \"{name}\" is invalid: {message}")]
    Invalid {
        resource: String,
        name: String,
        message: String,
    },

    #[error("Unauthorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("Resource type {resource} not found on server: {message}")]
    NotFound { resource: String, message: String },

    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

// The server's Status message already names the object.
fn already_exists(resource: &str, name: &str, message: &str) -> String {
    if message.is_empty() {
        format!("{} \"{}\" already exists", resource, name)
    } else {
        message.to_string()
    }
}

impl SubmitError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, SubmitError::Conflict { .. })
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("unsupported output format \"{format}\", allowed formats are: {allowed}")]
    UnsupportedFormat { format: String, allowed: String },

    #[error("object is missing field {0}")]
    MissingField(&'static str),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML encoding failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FwctlError>;
