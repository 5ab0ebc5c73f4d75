use std::fmt;
use std::str::FromStr;
use crate::protocol::enums::ack_outcome::AckOutcome;
use crate::protocol::enums::protocol_error::ProtocolError;

impl AckOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            AckOutcome::Success => "success",
            AckOutcome::Failure => "failure",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AckOutcome::Success)
    }
}

impl From<bool> for AckOutcome {
    fn from(success: bool) -> Self {
        if success { AckOutcome::Success } else { AckOutcome::Failure }
    }
}

impl FromStr for AckOutcome {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(AckOutcome::Success),
            "failure" => Ok(AckOutcome::Failure),
            other => Err(ProtocolError::InvalidOutcome(other.to_string())),
        }
    }
}

impl fmt::Display for AckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
