//! Link entity representing a short code to destination mapping.

/// A tracking link.
///
/// `code` is caller-supplied and unique across all links. Links are never
/// updated or deleted by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub destination: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, code: String, destination: String) -> Self {
        Self {
            id,
            code,
            destination,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub destination: String,
}
