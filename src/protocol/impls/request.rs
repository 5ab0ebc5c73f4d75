use std::fmt;
use crate::protocol::enums::ack_outcome::AckOutcome;
use crate::protocol::enums::protocol_error::ProtocolError;
use crate::protocol::enums::request::Request;
use crate::protocol::protocol::decode_datagram;
use crate::protocol::structs::download_ack::DownloadAck;
use crate::protocol::structs::file_query::FileQuery;
use crate::protocol::structs::share_request::ShareRequest;

impl Request {
    pub fn from_bytes(payload: &[u8]) -> Result<Request, ProtocolError>
    {
        Request::parse(&decode_datagram(payload))
    }

    #[tracing::instrument(level = "debug")]
    pub fn parse(message: &str) -> Result<Request, ProtocolError>
    {
        let tokens: Vec<&str> = message.split_whitespace().collect();
        let verb = *tokens.first().ok_or(ProtocolError::Empty)?;

        match verb {
            "share" => {
                Self::require("share", &tokens, 6)?;
                Ok(Request::Share(ShareRequest {
                    file_name: tokens[1].to_string(),
                    tracker_address: tokens[2].to_string(),
                    listen_port: Self::port(tokens[3])?,
                    server_port: Self::port(tokens[4])?,
                    ping_port: Self::port(tokens[5])?,
                }))
            }
            "get" => {
                Self::require("get", &tokens, 2)?;
                Ok(Request::Get(FileQuery {
                    file_name: tokens[1].to_string(),
                }))
            }
            "ack" => {
                Self::require("ack", &tokens, 5)?;
                Ok(Request::Ack(DownloadAck {
                    file_name: tokens[1].to_string(),
                    server_port: Self::port(tokens[2])?,
                    outcome: tokens[3].parse::<AckOutcome>()?,
                    ping_port: Self::port(tokens[4])?,
                }))
            }
            other => Err(ProtocolError::UnknownVerb(other.chars().take(32).collect())),
        }
    }

    pub fn file_name(&self) -> &str
    {
        match self {
            Request::Share(share) => &share.file_name,
            Request::Get(query) => &query.file_name,
            Request::Ack(ack) => &ack.file_name,
        }
    }

    fn require(verb: &'static str, tokens: &[&str], expected: usize) -> Result<(), ProtocolError>
    {
        if tokens.len() < expected {
            return Err(ProtocolError::MissingFields { verb, expected, got: tokens.len() });
        }
        Ok(())
    }

    fn port(token: &str) -> Result<u16, ProtocolError>
    {
        token.parse::<u16>().map_err(|_| ProtocolError::InvalidPort(token.chars().take(16).collect()))
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Share(share) => write!(f, "{share}"),
            Request::Get(query) => write!(f, "{query}"),
            Request::Ack(ack) => write!(f, "{ack}"),
        }
    }
}
