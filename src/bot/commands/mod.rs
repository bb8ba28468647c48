//! Command definitions grouped by help category.

pub mod general;
pub mod member;
pub mod owner;
pub mod price;
pub mod report;

use crate::{bot::Data, error::AppError};

/// Every command the framework registers, in help order.
pub fn all() -> Vec<poise::Command<Data, AppError>> {
    vec![
        general::help(),
        general::botinfo(),
        general::serverinfo(),
        general::ping(),
        general::invite(),
        general::server(),
        price::bitcoin(),
        member::register(),
        report::report(),
        report::reports(),
        owner::blacklist(),
    ]
}
