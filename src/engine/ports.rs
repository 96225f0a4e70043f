use serenity::all::{ChannelId, MessageId, UserId};
use time::OffsetDateTime;

use crate::models::{error::GiveawayResult, giveaway::DisplayHandle, view::View};

/// Reads who has entered a giveaway.
#[async_trait::async_trait]
pub trait EntrySource: Send + Sync {
    /// Distinct, non-bot users that reacted to the giveaway message.
    async fn list_entrants(&self, handle: &DisplayHandle) -> GiveawayResult<Vec<UserId>>;
}

/// The visible side of a giveaway.
#[async_trait::async_trait]
pub trait Presentation: Send + Sync {
    async fn create_display(&self, channel_id: ChannelId, view: &View)
        -> GiveawayResult<MessageId>;
    /// Adds the reaction users click to enter.
    async fn enable_entry(&self, handle: &DisplayHandle) -> GiveawayResult<()>;
    async fn render(&self, handle: &DisplayHandle, view: &View) -> GiveawayResult<()>;
    async fn announce(&self, channel_id: ChannelId, text: &str) -> GiveawayResult<()>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
