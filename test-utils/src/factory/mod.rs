//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle foreign key relationships so tests only
//! spell out the values they actually assert on.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let member = factory::member::create_member(&db).await?;
//!
//!     // Create with all dependencies
//!     let (member, report) = factory::helpers::create_report_with_member(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let member = factory::member::MemberFactory::new(&db)
//!     .id("42")
//!     .activision_id("Ghost#123")
//!     .passkey("1234")
//!     .build()
//!     .await?;
//! ```

pub mod blacklisted_user;
pub mod helpers;
pub mod member;
pub mod report;

pub use blacklisted_user::create_blacklisted_user;
pub use member::create_member;
pub use report::create_report;
