/// One line typed at the peer prompt.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum PeerCommand {
    Share { path: String, tracker: String, port: u16 },
    Get { file_name: String, tracker: String, port: u16 },
    Status,
    Quit,
}
