use crate::error::unsupported_database::UnsupportedDatabaseError;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum DatabaseKind {
    #[strum(serialize = "mysql")]
    MySQL,

    #[strum(to_string = "postgres", serialize = "postgresql")]
    Postgres,
}

impl DatabaseKind {
    /// Resolves a request's engine tag, ignoring case.
    pub fn parse(tag: &str) -> Result<Self, UnsupportedDatabaseError> {
        DatabaseKind::from_str(&tag.to_lowercase())
            .map_err(|_| UnsupportedDatabaseError::new(tag))
    }
}
