pub mod alert;
pub mod chat_history;
pub mod check_in;
pub mod concern;
pub mod response;
pub mod risk;
