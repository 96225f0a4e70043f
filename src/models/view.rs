use std::{num::NonZeroUsize, time::Duration};

use serenity::all::UserId;

pub const ENTRY_EMOJI: &str = "🎉";

/// What the giveaway message shows at each stage of its life.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Countdown {
        prize: String,
        winners: NonZeroUsize,
        remaining: Duration,
    },
    Ended {
        prize: String,
        winners: Vec<UserId>,
    },
    Reroll {
        prize: String,
        winners: Vec<UserId>,
    },
    /// Shown on a posted giveaway that could not be opened for entries.
    Cancelled {
        prize: String,
    },
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Countdown { .. } => "🎉 Giveaway 🎉",
            View::Ended { .. } => "🎉 Giveaway Ended 🎉",
            View::Reroll { .. } => "🎉 Giveaway Reroll 🎉",
            View::Cancelled { .. } => "Giveaway Cancelled",
        }
    }

    pub fn footer(&self) -> &'static str {
        match self {
            View::Countdown { .. } => "Giveaway",
            View::Ended { .. } => "Giveaway Ended",
            View::Reroll { .. } => "Giveaway Reroll",
            View::Cancelled { .. } => "Giveaway Cancelled",
        }
    }

    pub fn colour(&self) -> u32 {
        match self {
            View::Countdown { .. } => 0xfdca4c,
            View::Ended { .. } => 0x4752c4,
            View::Reroll { .. } => 0xeb966d,
            View::Cancelled { .. } => 0xf00000,
        }
    }

    pub fn description(&self) -> String {
        match self {
            View::Countdown {
                prize,
                winners,
                remaining,
            } => format!(
                "Prize: {prize}\nReact with {ENTRY_EMOJI} to enter!\n\nWinners: {winners}\nEnds In: {}",
                countdown(*remaining)
            ),
            View::Ended { prize, winners } => {
                format!("Prize: {prize}\nWinners: {}", winner_list(winners))
            }
            View::Reroll { prize, winners } => {
                format!("Prize: {prize}\nNew Winners: {}", winner_list(winners))
            }
            View::Cancelled { prize } => {
                format!("Prize: {prize}\nThis giveaway could not be started.")
            }
        }
    }
}

/// Whole seconds only, a sub-second tail would change on every refresh.
fn countdown(remaining: Duration) -> String {
    let seconds = Duration::from_secs(remaining.as_secs().max(1));
    pretty_duration::pretty_duration(&seconds, None)
}

pub fn mentions(winners: &[UserId]) -> String {
    winners
        .iter()
        .map(|winner| format!("<@{winner}>"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn winner_list(winners: &[UserId]) -> String {
    if winners.is_empty() {
        "No valid entries.".to_string()
    } else {
        mentions(winners)
    }
}

/// The message posted to the channel after a draw or reroll.
pub fn announcement(prize: &str, winners: &[UserId]) -> String {
    if winners.is_empty() {
        format!("No valid entries were found for the giveaway of {prize}.")
    } else {
        format!(
            "Congratulations {}! You won the prize: {prize}",
            mentions(winners)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_mentions_every_winner() {
        let winners = vec![UserId::new(11), UserId::new(22)];

        assert_eq!(
            announcement("Gift Card", &winners),
            "Congratulations <@11>, <@22>! You won the prize: Gift Card"
        );
    }

    #[test]
    fn announcement_without_winners() {
        assert_eq!(
            announcement("Gift Card", &[]),
            "No valid entries were found for the giveaway of Gift Card."
        );
    }

    #[test]
    fn ended_and_reroll_views_share_shape() {
        let winners = vec![UserId::new(5)];
        let ended = View::Ended {
            prize: "Gift Card".to_string(),
            winners: winners.clone(),
        };
        let reroll = View::Reroll {
            prize: "Gift Card".to_string(),
            winners,
        };

        assert_eq!(ended.description(), "Prize: Gift Card\nWinners: <@5>");
        assert_eq!(reroll.description(), "Prize: Gift Card\nNew Winners: <@5>");
        assert_eq!(ended.footer(), "Giveaway Ended");
        assert_eq!(reroll.title(), "🎉 Giveaway Reroll 🎉");
    }

    #[test]
    fn ended_view_without_entries() {
        let view = View::Ended {
            prize: "Gift Card".to_string(),
            winners: vec![],
        };

        assert_eq!(view.description(), "Prize: Gift Card\nWinners: No valid entries.");
    }

    #[test]
    fn cancelled_view() {
        let view = View::Cancelled {
            prize: "Gift Card".to_string(),
        };

        assert_eq!(
            view.description(),
            "Prize: Gift Card\nThis giveaway could not be started."
        );
        assert_eq!(view.footer(), "Giveaway Cancelled");
    }

    #[test]
    fn countdown_lists_prize_and_winner_count() {
        let view = View::Countdown {
            prize: "Gift Card".to_string(),
            winners: NonZeroUsize::new(3).unwrap(),
            remaining: Duration::from_secs(600),
        };
        let description = view.description();

        assert!(description.starts_with("Prize: Gift Card\nReact with 🎉 to enter!"));
        assert!(description.contains("Winners: 3\nEnds In: "));
        assert_eq!(view.title(), "🎉 Giveaway 🎉");
    }
}
