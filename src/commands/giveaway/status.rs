use serenity::{
    all::{CommandInteraction, MessageId},
    builder::CreateEmbed,
};

use crate::models::{
    command::{CommandContext, CommandContextReply},
    giveaway::Giveaway,
    handler::Handler,
    response::{Response, ResponseResult},
};

const MAX_LISTED: usize = 20;

fn describe(giveaways: &[(MessageId, Giveaway)]) -> String {
    if giveaways.is_empty() {
        return "There are no running giveaways.".to_string();
    }

    let mut lines = giveaways
        .iter()
        .take(MAX_LISTED)
        .map(|(id, giveaway)| {
            format!(
                "`{id}` **{}** in <#{}>\n{} winner(s), ends <t:{}:R>",
                giveaway.prize,
                giveaway.channel_id,
                giveaway.winners,
                giveaway.end_time.unix_timestamp()
            )
        })
        .collect::<Vec<_>>();

    if giveaways.len() > MAX_LISTED {
        lines.push(format!("...and {} more", giveaways.len() - MAX_LISTED));
    }

    lines.join("\n\n")
}

pub async fn status(
    handler: &Handler,
    ctx: &CommandContext,
    cmd: &CommandInteraction,
) -> ResponseResult {
    ctx.defer(cmd).await?;

    let giveaways = handler.engine.status().await;

    ctx.reply(
        cmd,
        Response::new()
            .embed(
                CreateEmbed::new()
                    .title(format!("Running giveaways ({})", giveaways.len()))
                    .description(describe(&giveaways))
                    .color(0xfdca4c),
            )
            .ephemeral(true),
    )
    .await
}

#[cfg(test)]
mod tests {
    use std::{num::NonZeroUsize, time::Duration};

    use serenity::all::ChannelId;
    use time::macros::datetime;

    use super::*;

    fn giveaway(prize: &str) -> Giveaway {
        Giveaway {
            channel_id: ChannelId::new(9),
            duration: Duration::from_secs(60),
            winners: NonZeroUsize::new(2).unwrap(),
            prize: prize.to_string(),
            end_time: datetime!(2024-01-01 00:01 UTC),
        }
    }

    #[test]
    fn empty_status() {
        assert_eq!(describe(&[]), "There are no running giveaways.");
    }

    #[test]
    fn lists_id_prize_channel_and_relative_end() {
        let text = describe(&[(MessageId::new(5), giveaway("Nitro"))]);

        assert_eq!(
            text,
            "`5` **Nitro** in <#9>\n2 winner(s), ends <t:1704067260:R>"
        );
    }

    #[test]
    fn long_lists_are_cut_short() {
        let giveaways = (1..=25)
            .map(|id| (MessageId::new(id), giveaway("Nitro")))
            .collect::<Vec<_>>();

        let text = describe(&giveaways);

        assert!(text.ends_with("...and 5 more"));
        assert_eq!(text.matches("**Nitro**").count(), MAX_LISTED);
    }
}
