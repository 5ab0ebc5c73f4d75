#[derive(PartialEq, Eq, Clone, Debug)]
pub struct FileQuery {
    pub file_name: String,
}
