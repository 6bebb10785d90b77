//! Docket Core Domain
//!
//! Pure domain types for the regulations search client.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::Regulation;
pub use values::DocketId;
