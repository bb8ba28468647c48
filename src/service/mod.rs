//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot commands and the data repositories. They validate
//! command input, apply registry rules such as passkey normalization and uniqueness,
//! and coordinate repository calls. Commands never talk to repositories directly.

pub mod blacklist;
pub mod member;
pub mod price;
pub mod report;

#[cfg(test)]
mod test;
