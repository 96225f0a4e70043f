use std::{
    sync::{atomic::AtomicBool, Arc},
    time::{Duration, Instant},
};

use crate::engine::Engine;

#[derive(Clone)]
pub struct Handler {
    pub engine: Arc<Engine>,
    pub start_time: Instant,
    pub refresh_interval: Duration,
    /// Set once the refresh loop is running; `ready` fires again on reconnect.
    pub refresh_started: Arc<AtomicBool>,
}
