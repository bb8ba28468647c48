//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return, so embed builders can be tested without a gateway.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_guild;
//!
//! let guild = create_test_guild(123456789, "Test Guild", &["@everyone"]);
//! ```

pub mod guild;

pub use guild::create_test_guild;
