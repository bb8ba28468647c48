//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to test
//! domain conversions and pure logic without database overhead.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let member = fixture::member::entity();
//!
//! let other = fixture::member::entity_builder()
//!     .id("42")
//!     .passkey("4321")
//!     .build();
//! ```

pub mod member;

pub use member::{entity as member_entity, entity_builder as member_entity_builder};
