//! Common traits for AWX resources

/// Common trait for AWX resources (users, teams, roles, tokens, ...)
///
/// Every AWX record is identified by an integer id; the rest of the
/// trait is what the CLI needs to render and filter rows.
pub trait AwxResource {
    /// Get the resource ID
    fn id(&self) -> i64;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Short description shown in tables (empty when unknown)
    fn description(&self) -> &str {
        ""
    }

    /// Check if the resource matches by ID or name
    fn matches(&self, input: &str) -> bool {
        self.id().to_string() == input || self.name() == input
    }

    /// Case-insensitive substring match on the name
    fn name_contains(&self, filter: &str) -> bool {
        self.name().to_lowercase().contains(&filter.to_lowercase())
    }
}
