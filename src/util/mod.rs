pub mod parse;
pub mod passkey;
