//! Domain models and operation parameters.
//!
//! Domain models are converted from SeaORM entities at the repository boundary, so the
//! service and bot layers only ever see Discord IDs as `u64` and enumerations as typed
//! values. Parameter types carry the input of a single operation.

pub mod blacklist;
pub mod member;
pub mod report;
