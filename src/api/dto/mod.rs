pub mod health;
pub mod message;
