//! SeaORM entities for the member registry, report ledger and blacklist store.

pub mod prelude;

pub mod blacklisted_user;
pub mod member;
pub mod report;
pub mod sea_orm_active_enums;
