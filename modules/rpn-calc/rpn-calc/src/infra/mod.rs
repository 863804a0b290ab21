//! Infrastructure layer for the RPN calculator module.

pub mod storage;

pub use storage::InMemoryCalculatorRepository;
