//! RPN Calculator SDK
//!
//! This crate provides everything needed to consume the RPN calculator module:
//! - API trait (`RpnCalcClient`)
//! - Error types (`RpnCalcError`)
//! - Models (`Handle`, `Operator`)
//!
//! ## Usage
//!
//! ```ignore
//! use rpn_calc_sdk::RpnCalcClient;
//!
//! let h = client.create()?;
//! client.push(h, 3.0)?;
//! client.push(h, 5.0)?;
//! assert_eq!(client.apply(h, '-')?, -2.0);
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT ===
mod api;
pub use api::RpnCalcClient;

// === ERRORS ===
mod error;
pub use error::RpnCalcError;

// === MODELS ===
mod models;
pub use models::{Handle, Operator};
