use serenity::builder::CreateEmbed;

use super::error::GiveawayError;

pub struct Response {
    pub embeds: Option<Vec<CreateEmbed>>,
    pub ephemeral: bool,
}

#[derive(Debug)]
pub enum ResponseError {
    Serenity(serenity::Error),
    Execution(&'static str, Option<String>),
}

pub type ResponseResult = Result<(), ResponseError>;

impl Response {
    pub fn new() -> Self {
        Response {
            embeds: None,
            ephemeral: false,
        }
    }

    pub fn embed(mut self, embed: CreateEmbed) -> Self {
        self.embeds = Some(vec![embed]);
        self
    }

    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }
}

impl From<GiveawayError> for ResponseError {
    fn from(value: GiveawayError) -> Self {
        match value {
            GiveawayError::Validation(reason) => {
                ResponseError::Execution("Invalid giveaway options", Some(reason.to_string()))
            }
            GiveawayError::NotFound(_) => ResponseError::Execution(
                "This giveaway could not be found",
                Some("Please use the message ID for the giveaway ID".to_string()),
            ),
            GiveawayError::Transport(reason) => ResponseError::Execution(
                "Could not update the giveaway message",
                Some(format!("Discord rejected the request: {reason}")),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use serenity::all::MessageId;

    use super::*;

    #[test]
    fn not_found_points_at_message_id() {
        let err = ResponseError::from(GiveawayError::NotFound(MessageId::new(3)));

        assert!(matches!(
            err,
            ResponseError::Execution("This giveaway could not be found", Some(_))
        ));
    }

    #[test]
    fn validation_reason_is_shown_to_the_user() {
        let err = ResponseError::from(GiveawayError::Validation("You must specify a prize."));

        match err {
            ResponseError::Execution(_, Some(detail)) => {
                assert_eq!(detail, "You must specify a prize.");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
