//! RPN Calculator Module Implementation
//!
//! Independent reverse-Polish calculators addressed by integer handles.
//! The public API is defined in `rpn-calc-sdk` and re-exported here.
//!
//! ## Architecture
//!
//! - **Two-level locking**: the registry lock covers only handle lookup,
//!   insert and removal; each calculator has its own lock for stack work.
//! - **Shared ownership**: the registry hands out `Arc` references, so a
//!   calculator deleted while another caller holds it is freed only when the
//!   last reference is dropped.
//! - **Explicit lifecycle**: `RpnCalcModule` owns the registry; nothing is global.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === PUBLIC API (from SDK) ===
pub use rpn_calc_sdk::{Handle, Operator, RpnCalcClient, RpnCalcError};

// === MODULE DEFINITION ===
pub mod module;
pub use module::RpnCalcModule;

// === CONFIGURATION ===
pub mod config;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
mod local_client;
pub use local_client::RpnCalcLocalClient;
