//! Local client implementing the `RpnCalcClient` trait.

use std::sync::Arc;

use rpn_calc_sdk::{Handle, RpnCalcClient, RpnCalcError};

use crate::domain::service::RpnCalcService;

/// In-process client that delegates to the domain service and converts
/// domain errors to SDK errors.
#[derive(Clone)]
pub struct RpnCalcLocalClient {
    service: Arc<RpnCalcService>,
}

impl RpnCalcLocalClient {
    #[must_use]
    pub fn new(service: Arc<RpnCalcService>) -> Self {
        Self { service }
    }
}

impl RpnCalcClient for RpnCalcLocalClient {
    fn create(&self) -> Result<Handle, RpnCalcError> {
        self.service.create().map_err(Into::into)
    }

    fn delete(&self, handle: Handle) -> Result<(), RpnCalcError> {
        self.service.delete(handle).map_err(Into::into)
    }

    fn push(&self, handle: Handle, value: f64) -> Result<(), RpnCalcError> {
        self.service.push(handle, value).map_err(Into::into)
    }

    fn pop(&self, handle: Handle) -> Result<f64, RpnCalcError> {
        self.service.pop(handle).map_err(Into::into)
    }

    fn apply(&self, handle: Handle, symbol: char) -> Result<f64, RpnCalcError> {
        self.service.apply(handle, symbol).map_err(Into::into)
    }

    fn size(&self, handle: Handle) -> Result<usize, RpnCalcError> {
        self.service.size(handle).map_err(Into::into)
    }

    fn at(&self, handle: Handle, index: usize) -> Result<f64, RpnCalcError> {
        self.service.at(handle, index).map_err(Into::into)
    }

    fn snapshot(&self, handle: Handle) -> Result<Vec<f64>, RpnCalcError> {
        self.service.snapshot(handle).map_err(Into::into)
    }
}
