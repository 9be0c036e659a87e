pub mod notifier;
pub mod payload;

pub use notifier::{DeliveryError, Notify, SlackNotifier};
pub use payload::{Accessory, Block, BlockText, WebhookPayload};
