#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for rpn-calc integration tests

use std::sync::Arc;

use rpn_calc::config::RpnCalcConfig;
use rpn_calc::domain::RpnCalcService;
use rpn_calc::infra::InMemoryCalculatorRepository;
use rpn_calc::{RpnCalcClient, RpnCalcLocalClient};

pub fn create_service_with(config: &RpnCalcConfig) -> Arc<RpnCalcService> {
    let repo = Arc::new(InMemoryCalculatorRepository::new(config));
    Arc::new(RpnCalcService::new(repo))
}

pub fn create_client() -> Arc<dyn RpnCalcClient> {
    create_client_with(&RpnCalcConfig::default())
}

pub fn create_client_with(config: &RpnCalcConfig) -> Arc<dyn RpnCalcClient> {
    Arc::new(RpnCalcLocalClient::new(create_service_with(config)))
}

/// Pushes `values` in order onto `h`.
pub fn push_all(client: &dyn RpnCalcClient, h: rpn_calc::Handle, values: &[f64]) {
    for v in values {
        client.push(h, *v).unwrap();
    }
}
