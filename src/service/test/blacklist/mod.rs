use crate::{
    error::{validation::ValidationError, AppError},
    model::blacklist::BLACKLIST_REASON_MAX_LENGTH,
    service::blacklist::BlacklistService,
};
use test_utils::{builder::TestBuilder, factory};

mod remove;
