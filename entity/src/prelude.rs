pub use super::blacklisted_user::Entity as BlacklistedUser;
pub use super::member::Entity as Member;
pub use super::report::Entity as Report;
