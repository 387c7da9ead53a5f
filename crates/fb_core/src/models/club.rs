use serde::{Deserialize, Serialize};
use std::fmt;

/// A football club and the stadium it plays its home matches in.
///
/// Both fields are fixed at construction. No validation is applied, so an
/// empty name or stadium is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Club {
    name: String,
    stadium: String,
}

impl Club {
    pub fn new(name: impl Into<String>, stadium: impl Into<String>) -> Self {
        Self { name: name.into(), stadium: stadium.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stadium(&self) -> &str {
        &self.stadium
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
