use crate::models::Handle;

/// Errors for the RPN calculator module
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RpnCalcError {
    #[error("calculator not found: {0}")]
    NotFound(Handle),

    #[error("insufficient operands: need {required}, stack holds {available}")]
    Insufficient { required: usize, available: usize },

    #[error("invalid argument: {0}")]
    Invalid(String),

    #[error("out of memory")]
    OutOfMemory,
}

impl RpnCalcError {
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    #[must_use]
    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::Insufficient { .. })
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    #[must_use]
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::OutOfMemory)
    }
}
