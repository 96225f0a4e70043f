use std::sync::atomic::Ordering;

use serenity::{
    all::{CommandInteraction, Message},
    builder::{
        CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
        EditInteractionResponse,
    },
};
use tracing::{debug, error};

use crate::models::{
    command::{CommandContext, CommandContextReply},
    response::{Response, ResponseError, ResponseResult},
};

#[async_trait::async_trait]
impl CommandContextReply for CommandContext {
    async fn reply_get_message(
        &self,
        cmd: &CommandInteraction,
        response: Response,
    ) -> Result<Message, ResponseError> {
        let start = std::time::Instant::now();
        let message = if self.has_responsed.load(Ordering::Relaxed) {
            let mut edit = EditInteractionResponse::new();
            if let Some(embeds) = response.embeds {
                edit = edit.embeds(embeds);
            }

            match cmd.edit_response(&self.ctx.http, edit).await {
                Ok(message) => message,
                Err(err) => {
                    error!("Attempted to edit a response to a command, failed with error: {err}");
                    return Err(ResponseError::Serenity(err));
                }
            }
        } else {
            let mut reply = CreateInteractionResponseMessage::new();
            if let Some(embeds) = response.embeds {
                reply = reply.embeds(embeds);
            }
            if response.ephemeral {
                reply = reply.ephemeral(true);
            }

            match cmd
                .create_response(&self.ctx.http, CreateInteractionResponse::Message(reply))
                .await
            {
                Ok(()) => {
                    self.has_responsed.store(true, Ordering::Relaxed);
                    match cmd.get_response(&self.ctx.http).await {
                        Ok(message) => message,
                        Err(err) => {
                            error!(
                                "A message was sent, but failed to fetch, failed with error: {err}"
                            );
                            return Err(ResponseError::Serenity(err));
                        }
                    }
                }
                Err(err) => {
                    error!("Attempted to create a response to a command, failed with error: {err}");
                    return Err(ResponseError::Serenity(err));
                }
            }
        };
        debug!("Took {:?} to reply to a command", start.elapsed());
        Ok(message)
    }

    async fn reply(&self, cmd: &CommandInteraction, response: Response) -> ResponseResult {
        self.reply_get_message(cmd, response).await?;
        Ok(())
    }

    /// Acknowledges the command privately so slow Discord calls do not run
    /// past the interaction deadline. Later replies edit this response.
    async fn defer(&self, cmd: &CommandInteraction) -> ResponseResult {
        if self.has_responsed.load(Ordering::Relaxed) {
            return Ok(());
        }
        if let Err(err) = cmd.defer_ephemeral(&self.ctx.http).await {
            error!("Attempted to defer a command, failed with error: {err}");
            return Err(ResponseError::Serenity(err));
        }
        self.has_responsed.store(true, Ordering::Relaxed);
        Ok(())
    }

    async fn error_message(&self, cmd: &CommandInteraction, error: ResponseError) {
        let embed = match error {
            ResponseError::Execution(title, description) => {
                let embed = CreateEmbed::new().title(title).color(0xf00000);
                match description {
                    Some(description) => embed.description(description),
                    None => embed,
                }
            }
            ResponseError::Serenity(_) => CreateEmbed::new()
                .title("An unexpected error occurred")
                .description("Please try again later.")
                .color(0xf00000),
        };

        if let Err(err) = self
            .reply(cmd, Response::new().embed(embed).ephemeral(true))
            .await
        {
            error!("Could not notify user of failed command. Failed with error: {err:?}");
        }
    }
}
