mod card_detail;
mod card_type;
mod new_card_form;
mod register_data;
mod transaction;
mod user;
