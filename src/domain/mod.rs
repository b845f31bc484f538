//! Domain module containing the Car value object and its error taxonomy
//!
//! Architecture: Domain Layer - Pure business logic independent of infrastructure
//! - Car is immutable and only obtainable through validation
//! - Errors describe which field broke which rule, never how to recover

pub mod car;
pub mod errors;
