//! Storage implementations for the RPN calculator module.

mod in_memory_repo;

pub use in_memory_repo::InMemoryCalculatorRepository;
