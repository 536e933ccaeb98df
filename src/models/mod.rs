pub mod conversation;
pub mod message;
pub mod offer;
pub mod request;
pub mod user;
