#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::unreadable_literal)]

use serenity::{http::Http, prelude::GatewayIntents, Client};
use std::{
    env,
    sync::{atomic::AtomicBool, Arc},
    time::Instant,
};
use tracing::{error, info};

use crate::{
    engine::{discord::DiscordChannel, ports::SystemClock, Engine},
    models::config::Config,
};

mod commands;
mod common;
mod engine;
mod events;
mod models;

#[tokio::main]
async fn main() {
    let log_level = match env::var("DEBUG").unwrap_or(false.to_string()).as_str() {
        "true" => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("Getting environment variables");
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            return;
        }
    };

    let discord = Arc::new(DiscordChannel::new(Arc::new(Http::new(
        &config.discord_token,
    ))));
    let engine = Engine::new(
        discord.clone(),
        discord,
        Arc::new(SystemClock),
        config.reroll_history,
    );
    info!(
        "Giveaway engine ready, remembering up to {} ended giveaways for rerolls",
        config.reroll_history
    );

    // Discord client connection
    let handler = models::handler::Handler {
        engine: Arc::new(engine),
        start_time: Instant::now(),
        refresh_interval: config.refresh_interval,
        refresh_started: Arc::new(AtomicBool::new(false)),
    };
    let intents = GatewayIntents::non_privileged();
    let mut client = match Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
    {
        Ok(client) => client,
        Err(err) => {
            error!("Could not create the Discord client: {}", err);
            return;
        }
    };

    if let Err(err) = client.start_autosharded().await {
        error!(
            "Attempted to start Confetti Discord client, but failed with error: {}",
            err
        );
    }
}
