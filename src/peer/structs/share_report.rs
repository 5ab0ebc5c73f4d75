#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ShareReport {
    pub file_name: String,
    pub serve_port: u16,
    pub reply: String,
}
