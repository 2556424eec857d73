pub mod client;
pub mod dispatch;
pub mod payload;

pub use client::{WebhookClient, WebhookError};
pub use dispatch::{DeliverySink, spawn_delivery};
pub use payload::WebhookPayload;
