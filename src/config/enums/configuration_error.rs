use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    ParseError(#[from] toml::de::Error),
    #[error("{0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("[VALIDATE CONFIG] {name}: \"{value}\" {reason}")]
    InvalidValue { name: &'static str, value: String, reason: &'static str },
    #[error("created default configuration at {0}, please review it and start again")]
    Created(String),
}
