use crate::{data::blacklist::BlacklistRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod get_all;
mod is_blacklisted;
mod remove;
