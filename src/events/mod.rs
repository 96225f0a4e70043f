pub mod command;
pub mod ready;
pub mod refresh;
pub mod router;
