use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FragmentResolutionError {
    /// A fragment the query needs, directly or through another fragment,
    /// is neither defined in the query nor registered.
    #[error(
        "could not resolve required fragment `{fragment_name}`{}",
        format_required_by(.required_by)
    )]
    UnresolvedFragment {
        fragment_name: String,
        /// The registered fragment that spreads `fragment_name`, or `None`
        /// if the query spreads it directly.
        required_by: Option<String>,
    },
}

impl FragmentResolutionError {
    pub fn fragment_name(&self) -> &str {
        match self {
            Self::UnresolvedFragment { fragment_name, .. } => fragment_name,
        }
    }
}

fn format_required_by(required_by: &Option<String>) -> String {
    required_by
        .as_deref()
        .map(|parent| format!(" (spread by fragment `{parent}`)"))
        .unwrap_or_default()
}
