use std::{num::NonZeroUsize, time::Duration};

use serenity::all::{ChannelId, MessageId};
use time::OffsetDateTime;

/// Where a giveaway is shown: the channel and the message acting as its handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DisplayHandle {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
}

/// A running giveaway, keyed in the store by the id of its display message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Giveaway {
    pub channel_id: ChannelId,
    pub duration: Duration,
    pub winners: NonZeroUsize,
    pub prize: String,
    pub end_time: OffsetDateTime,
}

impl Giveaway {
    pub fn handle(&self, message_id: MessageId) -> DisplayHandle {
        DisplayHandle {
            channel_id: self.channel_id,
            message_id,
        }
    }

    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        now >= self.end_time
    }

    /// Time left until the draw, or `None` once the giveaway has expired.
    pub fn remaining(&self, now: OffsetDateTime) -> Option<Duration> {
        if self.is_expired(now) {
            return None;
        }
        Duration::try_from(self.end_time - now).ok()
    }
}

/// What is kept of a giveaway after its draw, enough to reroll it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndedGiveaway {
    pub channel_id: ChannelId,
    pub prize: String,
    pub winners: NonZeroUsize,
}

impl From<&Giveaway> for EndedGiveaway {
    fn from(value: &Giveaway) -> Self {
        EndedGiveaway {
            channel_id: value.channel_id,
            prize: value.prize.clone(),
            winners: value.winners,
        }
    }
}
