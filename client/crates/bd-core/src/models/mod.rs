pub mod auth_response;
pub mod balance_info;
pub mod card_detail;
pub mod card_id;
pub mod card_type;
pub mod login_credentials;
pub mod new_card_form;
pub mod profile_update;
pub mod register_data;
pub mod session;
pub mod token_refresh;
pub mod transaction;
pub mod transaction_type;
pub mod user;
pub mod user_data;
