//! In-memory calculator registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use rpn_calc_sdk::Handle;

use crate::config::RpnCalcConfig;
use crate::domain::calculator::Calculator;
use crate::domain::error::DomainError;
use crate::domain::repo::{CalculatorRepository, SharedCalculator};

/// Table state guarded by the registry lock.
struct RegistryTable {
    calcs: HashMap<Handle, SharedCalculator>,
    /// Every handle ever issued is strictly below this value.
    next_handle: u64,
    closed: bool,
}

/// In-memory registry mapping handles to calculators.
///
/// One `Mutex` covers both the table and the handle counter. It is held only
/// for the O(1) insert, lookup or removal; callers receive an `Arc` and lock
/// the calculator after this lock is gone.
pub struct InMemoryCalculatorRepository {
    table: Mutex<RegistryTable>,
    max_calculators: Option<usize>,
    max_stack_depth: Option<usize>,
}

impl InMemoryCalculatorRepository {
    /// Creates an empty registry sized and limited by `config`.
    #[must_use]
    pub fn new(config: &RpnCalcConfig) -> Self {
        Self {
            table: Mutex::new(RegistryTable {
                calcs: HashMap::with_capacity(config.initial_table_capacity),
                next_handle: 0,
                closed: false,
            }),
            max_calculators: config.max_calculators,
            max_stack_depth: config.max_stack_depth,
        }
    }

    /// The handle the next successful `create` will issue.
    #[must_use]
    pub fn next_handle(&self) -> Handle {
        Handle::new(self.table.lock().next_handle)
    }
}

impl Default for InMemoryCalculatorRepository {
    fn default() -> Self {
        Self::new(&RpnCalcConfig::default())
    }
}

impl CalculatorRepository for InMemoryCalculatorRepository {
    fn create(&self) -> Result<Handle, DomainError> {
        let mut table = self.table.lock();

        if table.closed {
            return Err(DomainError::RegistryClosed);
        }
        if let Some(limit) = self.max_calculators
            && table.calcs.len() >= limit
        {
            return Err(DomainError::CalculatorLimitReached(limit));
        }
        table
            .calcs
            .try_reserve(1)
            .map_err(|e| DomainError::allocation_failed(&e))?;

        let raw = table.next_handle;
        table.next_handle = raw
            .checked_add(1)
            .ok_or(DomainError::HandleSpaceExhausted)?;

        let handle = Handle::new(raw);
        let calc = Arc::new(Mutex::new(Calculator::new(handle, self.max_stack_depth)));
        table.calcs.insert(handle, calc);
        Ok(handle)
    }

    fn remove(&self, handle: Handle) -> Result<SharedCalculator, DomainError> {
        self.table
            .lock()
            .calcs
            .remove(&handle)
            .ok_or(DomainError::NotFound(handle))
    }

    fn resolve(&self, handle: Handle) -> Result<SharedCalculator, DomainError> {
        self.table
            .lock()
            .calcs
            .get(&handle)
            .map(Arc::clone)
            .ok_or(DomainError::NotFound(handle))
    }

    fn len(&self) -> usize {
        self.table.lock().calcs.len()
    }

    fn close(&self) -> Vec<SharedCalculator> {
        let mut table = self.table.lock();
        table.closed = true;
        table.calcs.drain().map(|(_, calc)| calc).collect()
    }
}
