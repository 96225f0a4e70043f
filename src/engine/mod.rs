use std::{num::NonZeroUsize, sync::Arc, time::Duration};

use serenity::all::{ChannelId, MessageId, UserId};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::models::{
    error::{GiveawayError, GiveawayResult},
    giveaway::{DisplayHandle, EndedGiveaway, Giveaway},
    store::{EndedGiveaways, GiveawayStore},
    view::{announcement, View},
};

use self::{
    ports::{Clock, EntrySource, Presentation},
    selector::select_winners,
};

pub mod discord;
pub mod ports;
pub mod selector;

#[cfg(test)]
mod testing;

pub const INVALID_DURATION: &str = "Invalid duration. Use a format like `1d`, `2h`, `30m`.";
pub const INVALID_WINNERS: &str = "Invalid winner count. It must be a positive number.";
pub const MISSING_PRIZE: &str = "You must specify a prize.";
const STILL_RUNNING: &str = "This giveaway is still running. End it before rerolling.";

struct Ledger {
    active: GiveawayStore,
    ended: EndedGiveaways,
}

impl Ledger {
    /// Takes a giveaway out of the running set for its one and only draw.
    fn claim(&mut self, message_id: MessageId) -> Option<Giveaway> {
        let giveaway = self.active.delete(message_id)?;
        self.ended.remember(message_id, EndedGiveaway::from(&giveaway));
        Some(giveaway)
    }
}

#[derive(Clone, Copy)]
enum Draw {
    End,
    Reroll,
}

/// Outcome of a single scheduler pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    pub refreshed: usize,
    pub drawn: usize,
    pub abandoned: usize,
}

/// Owns every giveaway and runs them from start to draw.
///
/// All operations take the ledger lock for their whole duration, so the
/// scheduler and commands take turns and never see a record mid-draw.
pub struct Engine {
    ledger: Mutex<Ledger>,
    presentation: Arc<dyn Presentation>,
    entries: Arc<dyn EntrySource>,
    clock: Arc<dyn Clock>,
}

impl Engine {
    pub fn new(
        presentation: Arc<dyn Presentation>,
        entries: Arc<dyn EntrySource>,
        clock: Arc<dyn Clock>,
        history: usize,
    ) -> Self {
        Engine {
            ledger: Mutex::new(Ledger {
                active: GiveawayStore::default(),
                ended: EndedGiveaways::new(history),
            }),
            presentation,
            entries,
            clock,
        }
    }

    pub async fn start(
        &self,
        channel_id: ChannelId,
        duration: Duration,
        winners: usize,
        prize: &str,
    ) -> GiveawayResult<MessageId> {
        if duration.is_zero() {
            return Err(GiveawayError::Validation(INVALID_DURATION));
        }
        let Some(winners) = NonZeroUsize::new(winners) else {
            return Err(GiveawayError::Validation(INVALID_WINNERS));
        };
        let prize = prize.trim();
        if prize.is_empty() {
            return Err(GiveawayError::Validation(MISSING_PRIZE));
        }

        let mut ledger = self.ledger.lock().await;

        let end_time = time::Duration::try_from(duration)
            .ok()
            .and_then(|offset| self.clock.now().checked_add(offset))
            .ok_or(GiveawayError::Validation(INVALID_DURATION))?;

        let view = View::Countdown {
            prize: prize.to_string(),
            winners,
            remaining: duration,
        };
        let message_id = self.presentation.create_display(channel_id, &view).await?;
        let handle = DisplayHandle {
            channel_id,
            message_id,
        };

        if let Err(err) = self.presentation.enable_entry(&handle).await {
            warn!(
                "Could not add the entry reaction to giveaway {}, not starting it. Failed with error: {}",
                message_id, err
            );
            let cancelled = View::Cancelled {
                prize: prize.to_string(),
            };
            if let Err(render_err) = self.presentation.render(&handle, &cancelled).await {
                warn!(
                    "Could not mark giveaway {} as cancelled. Failed with error: {}",
                    message_id, render_err
                );
            }
            return Err(err);
        }

        ledger.active.set(
            message_id,
            Giveaway {
                channel_id,
                duration,
                winners,
                prize: prize.to_string(),
                end_time,
            },
        );
        info!(
            "Started giveaway {} in channel {} for {} winner(s), ending at {}",
            message_id, channel_id, winners, end_time
        );

        Ok(message_id)
    }

    /// Draws a running giveaway now instead of waiting for it to expire.
    pub async fn end(&self, message_id: MessageId) -> GiveawayResult<Vec<UserId>> {
        let mut ledger = self.ledger.lock().await;

        let Some(giveaway) = ledger.claim(message_id) else {
            return Err(GiveawayError::NotFound(message_id));
        };
        info!("Ending giveaway {} early", message_id);

        self.draw(
            giveaway.handle(message_id),
            &giveaway.prize,
            giveaway.winners,
            Draw::End,
        )
        .await
    }

    /// Draws fresh winners for a giveaway that has already ended. The entrants
    /// are read again, so anyone who reacted or left since the draw counts.
    pub async fn reroll(
        &self,
        message_id: MessageId,
        winners: Option<usize>,
    ) -> GiveawayResult<Vec<UserId>> {
        let winners = match winners {
            Some(winners) => Some(
                NonZeroUsize::new(winners).ok_or(GiveawayError::Validation(INVALID_WINNERS))?,
            ),
            None => None,
        };

        let ledger = self.ledger.lock().await;

        if ledger.active.has(message_id) {
            return Err(GiveawayError::Validation(STILL_RUNNING));
        }
        let Some(ended) = ledger.ended.get(message_id).cloned() else {
            debug!(
                "Giveaway {} is not among the {} remembered ended giveaways",
                message_id,
                ledger.ended.count()
            );
            return Err(GiveawayError::NotFound(message_id));
        };
        info!("Rerolling giveaway {}", message_id);

        let handle = DisplayHandle {
            channel_id: ended.channel_id,
            message_id,
        };
        self.draw(
            handle,
            &ended.prize,
            winners.unwrap_or(ended.winners),
            Draw::Reroll,
        )
        .await
    }

    /// Running giveaways, soonest to end first.
    pub async fn status(&self) -> Vec<(MessageId, Giveaway)> {
        let ledger = self.ledger.lock().await;

        let mut giveaways = ledger
            .active
            .iter()
            .map(|(id, giveaway)| (*id, giveaway.clone()))
            .collect::<Vec<_>>();
        giveaways.sort_by_key(|(id, giveaway)| (giveaway.end_time, *id));
        giveaways
    }

    /// Visits every running giveaway once: refreshes the countdown of those
    /// still running and draws those that have expired. A giveaway whose
    /// message cannot be reached is dropped so it is never retried.
    pub async fn tick(&self) -> TickSummary {
        let mut ledger = self.ledger.lock().await;
        let now = self.clock.now();
        let mut summary = TickSummary::default();
        if ledger.active.is_empty() {
            return summary;
        }
        debug!("Refreshing {} running giveaway(s)", ledger.active.len());

        for message_id in ledger.active.ids() {
            let Some(giveaway) = ledger.active.get(message_id).cloned() else {
                continue;
            };
            let handle = giveaway.handle(message_id);

            if let Some(remaining) = giveaway.remaining(now) {
                let view = View::Countdown {
                    prize: giveaway.prize,
                    winners: giveaway.winners,
                    remaining,
                };
                match self.presentation.render(&handle, &view).await {
                    Ok(()) => summary.refreshed += 1,
                    Err(err) => {
                        error!(
                            "Could not refresh giveaway {}, abandoning it. Failed with error: {}",
                            message_id, err
                        );
                        ledger.active.delete(message_id);
                        summary.abandoned += 1;
                    }
                }
                continue;
            }

            ledger.claim(message_id);
            debug!(
                "Giveaway {} has expired after {:?}, drawing winners",
                message_id, giveaway.duration
            );

            match self
                .draw(handle, &giveaway.prize, giveaway.winners, Draw::End)
                .await
            {
                Ok(_) => summary.drawn += 1,
                Err(err) => {
                    error!(
                        "Could not draw giveaway {}, abandoning it. Failed with error: {}",
                        message_id, err
                    );
                    summary.abandoned += 1;
                }
            }
        }

        summary
    }

    async fn draw(
        &self,
        handle: DisplayHandle,
        prize: &str,
        winners: NonZeroUsize,
        draw: Draw,
    ) -> GiveawayResult<Vec<UserId>> {
        let entrants = self.entries.list_entrants(&handle).await?;
        let entrant_count = entrants.len();
        let winners = select_winners(entrants, winners.get(), &mut rand::thread_rng());

        let view = match draw {
            Draw::End => View::Ended {
                prize: prize.to_string(),
                winners: winners.clone(),
            },
            Draw::Reroll => View::Reroll {
                prize: prize.to_string(),
                winners: winners.clone(),
            },
        };
        self.presentation.render(&handle, &view).await?;
        self.presentation
            .announce(handle.channel_id, &announcement(prize, &winners))
            .await?;

        info!(
            "Drew {} winner(s) from {} entrant(s) for giveaway {}",
            winners.len(),
            entrant_count,
            handle.message_id
        );
        Ok(winners)
    }
}
