/// Outcome a downloader reports back to the tracker.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum AckOutcome {
    Success,
    Failure,
}
