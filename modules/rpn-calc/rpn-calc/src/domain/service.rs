//! Domain service for the RPN calculator module.

use std::sync::Arc;

use rpn_calc_sdk::{Handle, Operator};
use tracing::{debug, warn};

use super::error::DomainError;
use super::repo::CalculatorRepository;

/// Domain service for calculator operations.
///
/// Every stack operation first resolves the handle through the repository,
/// which releases the registry lock before returning, and only then takes
/// the calculator's own lock. Both locks are scoped, so every exit path
/// releases them.
pub struct RpnCalcService {
    repo: Arc<dyn CalculatorRepository>,
}

impl RpnCalcService {
    /// Creates a new `RpnCalcService` with the given repository.
    #[must_use]
    pub fn new(repo: Arc<dyn CalculatorRepository>) -> Self {
        Self { repo }
    }

    /// Allocates a new calculator.
    ///
    /// # Errors
    /// Propagates resource exhaustion from the repository.
    pub fn create(&self) -> Result<Handle, DomainError> {
        let handle = self.repo.create().inspect_err(|e| {
            warn!(error = %e, "failed to create calculator");
        })?;
        debug!(%handle, "created calculator");
        Ok(handle)
    }

    /// Removes a calculator from the registry.
    ///
    /// Its stack is released once no operation still holds a reference.
    ///
    /// # Errors
    /// `NotFound` if the handle is not live.
    pub fn delete(&self, handle: Handle) -> Result<(), DomainError> {
        let calc = self.repo.remove(handle).inspect_err(|_| {
            warn!(%handle, "delete of unknown calculator");
        })?;
        debug!(
            %handle,
            in_flight = Arc::strong_count(&calc) - 1,
            "deleted calculator"
        );
        drop(calc);
        Ok(())
    }

    /// # Errors
    /// `NotFound`, or exhaustion when the stack cannot grow.
    pub fn push(&self, handle: Handle, value: f64) -> Result<(), DomainError> {
        let shared = self.repo.resolve(handle)?;
        let mut calc = shared.lock();
        calc.push(value)?;
        debug!(%handle, value, size = calc.size(), "pushed value");
        Ok(())
    }

    /// # Errors
    /// `NotFound`, or `InsufficientOperands` on an empty stack.
    pub fn pop(&self, handle: Handle) -> Result<f64, DomainError> {
        let shared = self.repo.resolve(handle)?;
        let mut calc = shared.lock();
        let value = calc.pop()?;
        debug!(%handle, value, size = calc.size(), "popped value");
        Ok(value)
    }

    /// Applies the operator named by `symbol`.
    ///
    /// The symbol is validated before the calculator lock is taken, so an
    /// unknown operator never touches the stack.
    ///
    /// # Errors
    /// `NotFound`, `UnknownOperator`, or `InsufficientOperands`.
    pub fn apply(&self, handle: Handle, symbol: char) -> Result<f64, DomainError> {
        let shared = self.repo.resolve(handle)?;
        let op =
            Operator::from_symbol(symbol).map_err(|_| DomainError::UnknownOperator(symbol))?;
        let mut calc = shared.lock();
        let result = calc.apply(op)?;
        debug!(%handle, %op, result, size = calc.size(), "applied operator");
        Ok(result)
    }

    /// # Errors
    /// `NotFound` if the handle is not live.
    pub fn size(&self, handle: Handle) -> Result<usize, DomainError> {
        let calc = self.repo.resolve(handle)?;
        let size = calc.lock().size();
        debug!(%handle, size, "read size");
        Ok(size)
    }

    /// # Errors
    /// `NotFound`, or `IndexOutOfRange` if `index >= size`.
    pub fn at(&self, handle: Handle, index: usize) -> Result<f64, DomainError> {
        let calc = self.repo.resolve(handle)?;
        let value = calc.lock().at(index)?;
        debug!(%handle, index, value, "read value");
        Ok(value)
    }

    /// # Errors
    /// `NotFound` if the handle is not live.
    pub fn snapshot(&self, handle: Handle) -> Result<Vec<f64>, DomainError> {
        let calc = self.repo.resolve(handle)?;
        let values = calc.lock().snapshot();
        debug!(%handle, size = values.len(), "read snapshot");
        Ok(values)
    }

    /// Number of live calculators.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.repo.len()
    }

    /// Closes the registry and removes every calculator; returns how many
    /// were live. Later creates fail and every old handle is `NotFound`.
    pub fn teardown(&self) -> usize {
        let drained = self.repo.close();
        let count = drained.len();
        drop(drained);
        count
    }
}
