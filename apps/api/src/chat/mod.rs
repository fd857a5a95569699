// Chat: conversations and messages held in memory, seeded at startup.

pub mod handlers;
pub mod service;

pub use service::ChatService;
