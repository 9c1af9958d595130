pub mod application;
pub mod feedback;
pub mod job;
pub mod notification;
pub mod query;
pub mod user;
