//! Domain error types for the RPN calculator module.

use rpn_calc_sdk::{Handle, RpnCalcError};
use thiserror::Error;

/// Domain-level errors for the RPN calculator module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The handle does not reference a live calculator.
    #[error("Calculator not found: {0}")]
    NotFound(Handle),

    /// The stack holds fewer values than the operation consumes.
    #[error("Calculator {handle} needs {required} operands, stack holds {available}")]
    InsufficientOperands {
        handle: Handle,
        required: usize,
        available: usize,
    },

    /// The operator symbol is not one of `+ - * /`.
    #[error("Unknown operator '{}'", .0.escape_default())]
    UnknownOperator(char),

    /// Indexed read outside `0..size`.
    #[error("Index {index} out of range for stack of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// The configured number of live calculators is reached.
    #[error("Calculator limit of {0} reached")]
    CalculatorLimitReached(usize),

    /// The configured stack depth of one calculator is reached.
    #[error("Calculator {handle} reached stack depth limit of {limit}")]
    StackDepthLimitReached { handle: Handle, limit: usize },

    /// The registry was closed by module shutdown.
    #[error("Calculator registry is closed")]
    RegistryClosed,

    /// Every 64-bit handle has been issued.
    #[error("Handle space exhausted")]
    HandleSpaceExhausted,

    /// The allocator refused to grow a container.
    #[error("Allocation failed: {0}")]
    AllocationFailed(String),
}

impl DomainError {
    #[must_use]
    pub fn allocation_failed(e: &std::collections::TryReserveError) -> Self {
        Self::AllocationFailed(e.to_string())
    }
}

impl From<DomainError> for RpnCalcError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(handle) => Self::NotFound(handle),
            DomainError::InsufficientOperands {
                required,
                available,
                ..
            } => Self::Insufficient {
                required,
                available,
            },
            e @ (DomainError::UnknownOperator(_) | DomainError::IndexOutOfRange { .. }) => {
                Self::Invalid(e.to_string())
            }
            DomainError::CalculatorLimitReached(_)
            | DomainError::StackDepthLimitReached { .. }
            | DomainError::RegistryClosed
            | DomainError::HandleSpaceExhausted
            | DomainError::AllocationFailed(_) => Self::OutOfMemory,
        }
    }
}
