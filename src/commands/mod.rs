use crate::models::command::Command;

pub mod giveaway;
pub mod help;
pub mod ping;

pub fn get_command_list() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(giveaway::GiveawayCommand),
        Box::new(help::HelpCommand),
        Box::new(ping::PingCommand),
    ]
}
