use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ProtocolError {
    #[error("empty message")]
    Empty,
    #[error("unknown verb '{0}'")]
    UnknownVerb(String),
    #[error("'{verb}' expects at least {expected} fields, got {got}")]
    MissingFields { verb: &'static str, expected: usize, got: usize },
    #[error("invalid port '{0}'")]
    InvalidPort(String),
    #[error("invalid ack outcome '{0}'")]
    InvalidOutcome(String),
    #[error("invalid holder entry '{0}'")]
    InvalidHolder(String),
    #[error("holder list is empty")]
    EmptyHolderList,
}
