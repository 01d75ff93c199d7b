pub mod error;
pub mod models;

pub use error::error_kind::ErrorKind;
pub use error::{CoreError, CoreResult};
pub use error_location::ErrorLocation;
pub use models::auth_response::AuthResponse;
pub use models::balance_info::{BalanceInfo, DEFAULT_BALANCE_AMOUNT, DEFAULT_CURRENCY_TYPE};
pub use models::card_detail::CardDetail;
pub use models::card_id::CardId;
pub use models::card_type::CardType;
pub use models::login_credentials::LoginCredentials;
pub use models::new_card_form::NewCardForm;
pub use models::profile_update::ProfileUpdate;
pub use models::register_data::{MIN_PASSWORD_LENGTH, RegisterData};
pub use models::session::Session;
pub use models::token_refresh::TokenRefresh;
pub use models::transaction::Transaction;
pub use models::transaction_type::TransactionType;
pub use models::user::User;
pub use models::user_data::UserData;

#[cfg(test)]
mod tests;
