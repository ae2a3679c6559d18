pub mod messages;
pub mod status;
