use crate::{
    error::{registry::RegistryError, validation::ValidationError, AppError},
    model::member::RegisterMemberParam,
    service::member::MemberService,
    util::passkey,
};
use test_utils::{builder::TestBuilder, factory};

mod check_passkey;
mod register;

fn register_param(id: u64, activision_id: &str, passkey: Option<&str>) -> RegisterMemberParam {
    RegisterMemberParam {
        id,
        guild_id: None,
        activision_id: activision_id.to_string(),
        twitter_name: None,
        passkey: passkey.map(str::to_string),
    }
}
