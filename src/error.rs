/// Errors raised by the lead capture forms
#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    #[error("No listing selected in the unlock dialog")]
    DialogClosed,

    #[error("No estimate to unlock yet")]
    NoEstimate,

    #[error(transparent)]
    Link(#[from] anyhow::Error),
}

/// Reject blank form values
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), LeadError> {
    if value.trim().is_empty() {
        Err(LeadError::MissingField(field))
    } else {
        Ok(())
    }
}
