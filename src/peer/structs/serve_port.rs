#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct ServePort {
    pub port: u16,
    /// `false` when an existing listener for the same file was reused.
    pub created: bool,
}
