use thiserror::Error;

#[derive(Error, Debug)]
pub enum BehaviourError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {path}")]
    UnsupportedConfigFormat { path: String },
}

impl BehaviourError {
    /// Config errors stop task construction; everything else can be retried
    /// with a different file or sink.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BehaviourError::InvalidConfig(_))
    }
}

pub type Result<T> = std::result::Result<T, BehaviourError>;
