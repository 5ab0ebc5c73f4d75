use crate::peer::structs::download_report::DownloadReport;

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum DownloadOutcome {
    /// The tracker knows no holder; nothing was acknowledged.
    NotFound,
    Completed(DownloadReport),
}
