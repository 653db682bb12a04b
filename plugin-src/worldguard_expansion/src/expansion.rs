//! Contract between a placeholder host and its expansions.

use crate::host::PlaceholderPlayer;

/// Identity an expansion reports to the placeholder host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionMetadata<'a> {
    pub name: &'a str,
    /// Namespace prefix, `%<identifier>_<params>%`.
    pub identifier: &'a str,
    pub author: &'a str,
    pub version: &'a str,
}

/// A source of placeholder values, registered under one identifier.
pub trait PlaceholderExpansion: Send + Sync {
    fn metadata(&self) -> &ExpansionMetadata<'static>;

    /// Resolves the text between `%<identifier>_` and the closing `%`.
    ///
    /// `None` leaves the placeholder untouched. `Some("")` replaces it with nothing.
    fn on_request(&self, player: Option<&dyn PlaceholderPlayer>, params: &str) -> Option<String>;

    fn name(&self) -> &str {
        self.metadata().name
    }

    fn identifier(&self) -> &str {
        self.metadata().identifier
    }

    fn author(&self) -> &str {
        self.metadata().author
    }

    fn version(&self) -> &str {
        self.metadata().version
    }
}
