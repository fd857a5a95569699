pub mod conversation;
pub mod favorite;
pub mod job;
pub mod project;
pub mod talent;
pub mod user;
