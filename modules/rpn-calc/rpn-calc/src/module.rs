//! Module declaration for the RPN calculator module.

use std::sync::Arc;

use anyhow::anyhow;
use rpn_calc_sdk::RpnCalcClient;
use tracing::{debug, info};

use crate::config::RpnCalcConfig;
use crate::domain::service::RpnCalcService;
use crate::infra::InMemoryCalculatorRepository;
use crate::local_client::RpnCalcLocalClient;

/// RPN calculator module.
///
/// Owns the calculator registry between `init` and `shutdown`. Adaptation
/// layers obtain an `Arc<dyn RpnCalcClient>` from it instead of reaching for
/// global state.
pub struct RpnCalcModule {
    service: arc_swap::ArcSwapOption<RpnCalcService>,
}

impl Default for RpnCalcModule {
    fn default() -> Self {
        Self {
            service: arc_swap::ArcSwapOption::from(None),
        }
    }
}

impl RpnCalcModule {
    /// Builds the registry and service and returns a client for them.
    ///
    /// # Errors
    /// Fails if the module is already initialized.
    pub fn init(&self, cfg: &RpnCalcConfig) -> anyhow::Result<Arc<dyn RpnCalcClient>> {
        info!("Initializing rpn_calc module");

        debug!(
            max_calculators = ?cfg.max_calculators,
            max_stack_depth = ?cfg.max_stack_depth,
            initial_table_capacity = cfg.initial_table_capacity,
            "Loaded rpn_calc config"
        );

        let repo = Arc::new(InMemoryCalculatorRepository::new(cfg));
        let service = Arc::new(RpnCalcService::new(repo));
        let prev = self
            .service
            .compare_and_swap(&None::<Arc<RpnCalcService>>, Some(Arc::clone(&service)));
        if prev.is_some() {
            return Err(anyhow!("rpn_calc module already initialized"));
        }

        info!("rpn_calc module initialized");
        Ok(Arc::new(RpnCalcLocalClient::new(service)))
    }

    /// Client bound to the running registry.
    ///
    /// # Errors
    /// Fails if the module is not initialized.
    pub fn client(&self) -> anyhow::Result<Arc<dyn RpnCalcClient>> {
        let service = self
            .service
            .load_full()
            .ok_or_else(|| anyhow!("rpn_calc module not initialized"))?;
        Ok(Arc::new(RpnCalcLocalClient::new(service)))
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.service.load().is_some()
    }

    /// Number of live calculators, or 0 when not initialized.
    #[must_use]
    pub fn live_calculators(&self) -> usize {
        self.service
            .load()
            .as_ref()
            .map_or(0, |service| service.live_count())
    }

    /// Destroys every live calculator, closes the registry and detaches it.
    ///
    /// Clients handed out earlier keep the detached service alive, but every
    /// old handle reports `NotFound` and `create` fails with `OutOfMemory`.
    /// Returns the number of calculators torn down.
    pub fn shutdown(&self) -> usize {
        let Some(service) = self.service.swap(None) else {
            debug!("rpn_calc shutdown requested but module is not initialized");
            return 0;
        };
        let count = service.teardown();
        info!(calculators = count, "rpn_calc module shut down");
        count
    }
}
