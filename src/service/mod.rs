pub mod browse;
pub mod conversation;
