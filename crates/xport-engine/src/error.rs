use xport_core::StructuredIssue;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("expected record, got {found}")]
    InputType { found: &'static str },
    #[error("render failed: {0}")]
    Render(#[from] std::io::Error),
    #[error("yaml encode failed: {0}")]
    Encode(#[from] serde_yaml::Error),
    #[error("rule paths did not resolve: {0:?}")]
    UnresolvedRules(Vec<StructuredIssue>),
}
