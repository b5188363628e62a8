pub mod chat;
pub mod health;
pub mod root;
pub mod session;
pub mod survey;
