use std::{collections::HashSet, sync::Arc};

use serenity::{
    all::{ChannelId, MessageId, ReactionType, User, UserId},
    builder::{CreateEmbed, CreateEmbedFooter, CreateMessage, EditMessage},
    http::Http,
    model::Timestamp,
};
use tracing::debug;

use super::ports::{EntrySource, Presentation};
use crate::models::{
    error::GiveawayResult,
    giveaway::DisplayHandle,
    view::{View, ENTRY_EMOJI},
};

const REACTION_PAGE_SIZE: u8 = 100;

/// Giveaway messages and reactions in Discord channels, over the REST API.
pub struct DiscordChannel {
    http: Arc<Http>,
}

impl DiscordChannel {
    pub fn new(http: Arc<Http>) -> Self {
        DiscordChannel { http }
    }
}

fn entry_reaction() -> ReactionType {
    ReactionType::Unicode(ENTRY_EMOJI.to_string())
}

/// Adds the humans from one page of reaction users to `entrants`, keeping
/// first-seen order. Returns the user to page after, or `None` once the page
/// came back short and there is nothing more to fetch.
fn collect_entrants(
    page: &[User],
    entrants: &mut Vec<UserId>,
    seen: &mut HashSet<UserId>,
) -> Option<UserId> {
    for user in page {
        if !user.bot && seen.insert(user.id) {
            entrants.push(user.id);
        }
    }

    if page.len() < usize::from(REACTION_PAGE_SIZE) {
        return None;
    }
    page.last().map(|user| user.id)
}

fn generate_embed(view: &View) -> CreateEmbed {
    CreateEmbed::new()
        .title(view.title())
        .description(view.description())
        .footer(CreateEmbedFooter::new(view.footer()))
        .timestamp(Timestamp::now())
        .color(view.colour())
}

#[async_trait::async_trait]
impl EntrySource for DiscordChannel {
    async fn list_entrants(&self, handle: &DisplayHandle) -> GiveawayResult<Vec<UserId>> {
        let mut entrants = vec![];
        let mut seen = HashSet::new();
        let mut after: Option<UserId> = None;

        loop {
            let users = handle
                .channel_id
                .reaction_users(
                    &self.http,
                    handle.message_id,
                    entry_reaction(),
                    Some(REACTION_PAGE_SIZE),
                    after,
                )
                .await?;
            after = collect_entrants(&users, &mut entrants, &mut seen);
            if after.is_none() {
                break;
            }
        }

        debug!(
            "Found {} entrant(s) for giveaway {}",
            entrants.len(),
            handle.message_id
        );
        Ok(entrants)
    }
}

#[async_trait::async_trait]
impl Presentation for DiscordChannel {
    async fn create_display(
        &self,
        channel_id: ChannelId,
        view: &View,
    ) -> GiveawayResult<MessageId> {
        let message = channel_id
            .send_message(&self.http, CreateMessage::new().embed(generate_embed(view)))
            .await?;
        Ok(message.id)
    }

    async fn enable_entry(&self, handle: &DisplayHandle) -> GiveawayResult<()> {
        self.http
            .create_reaction(handle.channel_id, handle.message_id, &entry_reaction())
            .await?;
        Ok(())
    }

    async fn render(&self, handle: &DisplayHandle, view: &View) -> GiveawayResult<()> {
        handle
            .channel_id
            .edit_message(
                &self.http,
                handle.message_id,
                EditMessage::new().embed(generate_embed(view)),
            )
            .await?;
        Ok(())
    }

    async fn announce(&self, channel_id: ChannelId, text: &str) -> GiveawayResult<()> {
        channel_id.say(&self.http, text).await?;
        Ok(())
    }
}
