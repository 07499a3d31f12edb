use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("expected exactly one architecture in config, found {count}")]
    ArchitectureCount { count: usize },
    #[error("unsupported architecture {name}")]
    UnsupportedArchitecture { name: String },
    #[error("unrecognized model_type {model_type:?} for architecture {name}")]
    UnknownModelType {
        name: String,
        model_type: Option<String>,
    },
    #[error("config is missing required key {key}")]
    MissingConfigKey { key: String },
}
