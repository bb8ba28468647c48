use std::collections::HashSet;

use crate::{
    error::{permission::PermissionError, AppError},
    guard::{Permission, PermissionGuard},
};
use test_utils::{builder::TestBuilder, factory};


const OWNER: u64 = 100;
const USER: u64 = 200;

fn owners() -> HashSet<u64> {
    HashSet::from([OWNER])
}
