use std::{
    collections::{HashMap, HashSet},
    sync::{Mutex, MutexGuard},
    time::Duration,
};

use serenity::all::{ChannelId, MessageId, UserId};
use time::OffsetDateTime;

use super::ports::{Clock, EntrySource, Presentation};
use crate::models::{
    error::{GiveawayError, GiveawayResult},
    giveaway::DisplayHandle,
    view::View,
};

/// In-memory stand-in for a Discord channel.
#[derive(Default)]
pub struct FakeChat {
    state: Mutex<FakeChatState>,
    /// Held by a test to stall every `render` until it is released.
    pub render_gate: tokio::sync::Mutex<()>,
}

#[derive(Default)]
pub struct FakeChatState {
    pub next_message: u64,
    pub displays: Vec<(ChannelId, View)>,
    pub renders: Vec<(DisplayHandle, View)>,
    pub reactions: Vec<DisplayHandle>,
    pub announcements: Vec<(ChannelId, String)>,
    pub entrants: HashMap<MessageId, Vec<UserId>>,
    pub entrant_queries: usize,
    pub broken: HashSet<MessageId>,
    pub fail_reactions: bool,
}

impl FakeChat {
    pub fn state(&self) -> MutexGuard<'_, FakeChatState> {
        self.state.lock().unwrap()
    }

    pub fn set_entrants(&self, message_id: MessageId, entrants: Vec<UserId>) {
        self.state().entrants.insert(message_id, entrants);
    }

    /// Makes every call touching this message fail, as if it was deleted.
    pub fn break_message(&self, message_id: MessageId) {
        self.state().broken.insert(message_id);
    }
}

fn unknown_message() -> GiveawayError {
    GiveawayError::Transport("Unknown Message".to_string())
}

#[async_trait::async_trait]
impl EntrySource for FakeChat {
    async fn list_entrants(&self, handle: &DisplayHandle) -> GiveawayResult<Vec<UserId>> {
        let mut state = self.state();
        state.entrant_queries += 1;
        if state.broken.contains(&handle.message_id) {
            return Err(unknown_message());
        }
        Ok(state
            .entrants
            .get(&handle.message_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl Presentation for FakeChat {
    async fn create_display(
        &self,
        channel_id: ChannelId,
        view: &View,
    ) -> GiveawayResult<MessageId> {
        let mut state = self.state();
        state.next_message += 1;
        state.displays.push((channel_id, view.clone()));
        Ok(MessageId::new(1_000 + state.next_message))
    }

    async fn enable_entry(&self, handle: &DisplayHandle) -> GiveawayResult<()> {
        let mut state = self.state();
        if state.fail_reactions {
            return Err(GiveawayError::Transport("Missing Permissions".to_string()));
        }
        state.reactions.push(*handle);
        Ok(())
    }

    async fn render(&self, handle: &DisplayHandle, view: &View) -> GiveawayResult<()> {
        let _gate = self.render_gate.lock().await;
        let mut state = self.state();
        if state.broken.contains(&handle.message_id) {
            return Err(unknown_message());
        }
        state.renders.push((*handle, view.clone()));
        Ok(())
    }

    async fn announce(&self, channel_id: ChannelId, text: &str) -> GiveawayResult<()> {
        self.state()
            .announcements
            .push((channel_id, text.to_string()));
        Ok(())
    }
}

pub struct FakeClock {
    now: Mutex<OffsetDateTime>,
}

impl FakeClock {
    pub fn new(now: OffsetDateTime) -> Self {
        FakeClock {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> OffsetDateTime {
        *self.now.lock().unwrap()
    }
}
