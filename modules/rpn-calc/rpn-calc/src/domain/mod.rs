//! Domain layer for the RPN calculator module.
//!
//! Contains the stack engine, error types, the repository trait and the
//! service that ties them together.

pub mod calculator;
pub mod error;
pub mod repo;
pub mod service;

pub use calculator::Calculator;
pub use error::DomainError;
pub use repo::{CalculatorRepository, SharedCalculator};
pub use service::RpnCalcService;
