pub mod create_user;
pub mod user_update;
