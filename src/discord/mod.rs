pub mod embeds;
pub mod sender;

pub use sender::{HttpSender, MessageSender, Publisher, RetryPolicy, http_sender};
