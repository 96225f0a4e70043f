use std::sync::atomic::AtomicBool;

use serenity::{
    all::{CommandInteraction, Message},
    builder::CreateCommand,
    prelude::Context as IncomingContext,
};

use super::{
    handler::Handler,
    response::{Response, ResponseError, ResponseResult},
};

pub struct CommandContext {
    pub ctx: IncomingContext,
    pub has_responsed: AtomicBool,
}

impl CommandContext {
    pub fn new(ctx: IncomingContext) -> Self {
        CommandContext {
            ctx,
            has_responsed: AtomicBool::new(false),
        }
    }
}

#[async_trait::async_trait]
pub trait CommandContextReply {
    async fn reply_get_message(
        &self,
        cmd: &CommandInteraction,
        response: Response,
    ) -> Result<Message, ResponseError>;
    async fn reply(&self, cmd: &CommandInteraction, response: Response) -> ResponseResult;
    async fn defer(&self, cmd: &CommandInteraction) -> ResponseResult;
    async fn error_message(&self, cmd: &CommandInteraction, error: ResponseError);
}

#[async_trait::async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn register(&self) -> CreateCommand;
    async fn router(
        &self,
        handler: &Handler,
        ctx: &CommandContext,
        cmd: &CommandInteraction,
    ) -> ResponseResult;
}
