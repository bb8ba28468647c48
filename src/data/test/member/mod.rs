use crate::{
    data::member::MemberRepository,
    error::{registry::RegistryError, AppError},
    model::member::CreateMemberParam,
    util::passkey,
};
use test_utils::{builder::TestBuilder, factory};

mod find_by_activision_id;
mod find_by_id;
mod find_by_twitter_name;

fn create_param(id: u64, activision_id: &str) -> CreateMemberParam {
    CreateMemberParam {
        id,
        guild_id: None,
        activision_id: activision_id.to_string(),
        twitter_name: None,
        passkey_hash: passkey::hash("1234"),
    }
}
