use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArsenalError {
    #[error("Name '{name}' already bound to '{existing}', cannot rebind to '{incoming}'")]
    DuplicateName {
        name: String,
        existing: String,
        incoming: String,
    },

    #[error("Weapon type not found: {0}")]
    NotFound(String),

    #[error("Unknown flag '{flag}' on weapon '{weapon}'")]
    UnknownFlag { weapon: String, flag: String },

    #[error("Weapon '{weapon}' has no firing mode '{mode}'")]
    UnknownMode { weapon: String, mode: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog file {}: {source}", path.display())]
    Catalog {
        path: std::path::PathBuf,
        #[source]
        source: Box<ArsenalError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArsenalError>;
