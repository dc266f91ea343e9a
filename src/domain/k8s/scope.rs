/// Namespace selection for cluster queries.
///
/// The wire uses the literal `all` to request every namespace; anything else
/// names a single one. Listing endpoints default to `All` when the parameter
/// is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceScope {
    All,
    Named(String),
}

impl NamespaceScope {
    /// Wire sentinel for the cluster-wide scope.
    pub const ALL: &'static str = "all";

    pub fn parse(raw: &str) -> Self {
        if raw == Self::ALL {
            NamespaceScope::All
        } else {
            NamespaceScope::Named(raw.to_string())
        }
    }

    pub fn from_query(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or(NamespaceScope::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            NamespaceScope::All => Self::ALL,
            NamespaceScope::Named(namespace) => namespace,
        }
    }
}
