use serenity::{all::CommandInteraction, prelude::Context as IncomingContext};
use tracing::{debug, error, info};

use crate::{
    commands::get_command_list,
    models::{
        command::{CommandContext, CommandContextReply},
        handler::Handler,
        response::ResponseError,
    },
};

impl Handler {
    pub async fn on_command(&self, ctx: IncomingContext, command: CommandInteraction) {
        let start = std::time::Instant::now();
        info!(
            "Got command '{}' by user '{}'",
            command.data.name, command.user.name
        );

        let command_context = CommandContext::new(ctx);

        let Some(existing_command) = get_command_list()
            .into_iter()
            .find(|existing_command| existing_command.name() == command.data.name)
        else {
            command_context
                .error_message(
                    &command,
                    ResponseError::Execution("Unknown command", None),
                )
                .await;
            return;
        };

        if let Err(err) = existing_command
            .router(self, &command_context, &command)
            .await
        {
            error!("Failed to handle command: {:?}", err);
            command_context.error_message(&command, err).await;
        }

        debug!("Took {:?} to handle a command", start.elapsed());
    }
}
