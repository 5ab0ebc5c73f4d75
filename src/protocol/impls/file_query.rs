use std::fmt;
use crate::protocol::structs::file_query::FileQuery;

impl fmt::Display for FileQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "get {}", self.file_name)
    }
}
