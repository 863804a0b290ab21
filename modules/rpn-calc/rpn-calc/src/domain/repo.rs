//! Repository trait for calculator storage.

use std::sync::Arc;

use parking_lot::Mutex;
use rpn_calc_sdk::Handle;

use super::calculator::Calculator;
use super::error::DomainError;

/// A calculator shared between the registry and in-flight operations.
///
/// The mutex is the per-calculator lock; the `Arc` keeps the calculator
/// alive for a caller that resolved it before a concurrent delete.
pub type SharedCalculator = Arc<Mutex<Calculator>>;

/// Storage interface for live calculators (the registry).
///
/// Implementations guard handle allocation and table membership with their
/// own lock and must never hold it while a calculator lock is taken.
pub trait CalculatorRepository: Send + Sync {
    /// Allocates a new empty calculator under a fresh handle.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The registry has been closed
    /// - The configured calculator limit is reached
    /// - The table cannot grow or the handle space is exhausted
    fn create(&self) -> Result<Handle, DomainError>;

    /// Unlinks a calculator from the table and returns it.
    ///
    /// The calculator itself is freed when the last reference drops.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the handle is not live.
    fn remove(&self, handle: Handle) -> Result<SharedCalculator, DomainError>;

    /// Looks up a live calculator.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the handle is not live.
    fn resolve(&self, handle: Handle) -> Result<SharedCalculator, DomainError>;

    /// Number of live calculators.
    fn len(&self) -> usize;

    /// Whether no calculator is live.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unlinks every calculator and returns them. Every later `create`
    /// fails with `RegistryClosed`.
    fn close(&self) -> Vec<SharedCalculator>;
}
