use crate::protocol::structs::download_ack::DownloadAck;
use crate::protocol::structs::file_query::FileQuery;
use crate::protocol::structs::share_request::ShareRequest;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Request {
    Share(ShareRequest),
    Get(FileQuery),
    Ack(DownloadAck),
}
