use std::str::FromStr;
use crate::peer::enums::peer_command::PeerCommand;
use crate::peer::peer::PEER_USAGE;

impl FromStr for PeerCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err>
    {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let port = |value: &str| value.parse::<u16>().map_err(|_| format!("invalid port: {value}"));
        match tokens.as_slice() {
            ["share", path, tracker, value] => Ok(PeerCommand::Share {
                path: path.to_string(),
                tracker: tracker.to_string(),
                port: port(value)?,
            }),
            ["get", file_name, tracker, value] => Ok(PeerCommand::Get {
                file_name: file_name.to_string(),
                tracker: tracker.to_string(),
                port: port(value)?,
            }),
            ["status"] => Ok(PeerCommand::Status),
            ["quit"] | ["exit"] => Ok(PeerCommand::Quit),
            _ => Err(PEER_USAGE.to_string()),
        }
    }
}
