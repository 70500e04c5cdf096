use std::error::Error;
use std::fmt::{self, Display};

#[derive(Debug, PartialEq)]
pub struct UnsupportedDatabaseError {
    pub database_type: String,
}

impl UnsupportedDatabaseError {
    pub fn new<T>(database_type: T) -> Self
    where
        T: Into<String>,
    {
        UnsupportedDatabaseError {
            database_type: database_type.into(),
        }
    }
}

impl Error for UnsupportedDatabaseError {}

impl Display for UnsupportedDatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unsupported database type '{}'", self.database_type)
    }
}
