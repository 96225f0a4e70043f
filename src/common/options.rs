use serenity::all::{ResolvedOption, ResolvedValue};

/// Looks up named values in a command's options, descending into the first
/// subcommand when there is one.
#[derive(Debug, Clone)]
pub struct Options<'a> {
    pub options: Vec<ResolvedOption<'a>>,
}

impl Options<'_> {
    pub fn subcommand(&self) -> Option<&str> {
        self.options.iter().find_map(|option| match option.value {
            ResolvedValue::SubCommand(_) | ResolvedValue::SubCommandGroup(_) => {
                Some(option.name)
            }
            _ => None,
        })
    }

    pub fn get_string(&self, name: &str) -> Option<String> {
        for option in &self.options {
            match &option.value {
                ResolvedValue::SubCommandGroup(cmd) | ResolvedValue::SubCommand(cmd) => {
                    let sub_options = Options {
                        options: cmd.clone(),
                    };
                    return sub_options.get_string(name);
                }
                ResolvedValue::String(string) => {
                    if option.name == name {
                        return Some((*string).to_string());
                    }
                }
                _ => continue,
            }
        }
        None
    }

    pub fn get_integer(&self, name: &str) -> Option<i64> {
        for option in &self.options {
            match &option.value {
                ResolvedValue::SubCommandGroup(cmd) | ResolvedValue::SubCommand(cmd) => {
                    let sub_options = Options {
                        options: cmd.clone(),
                    };
                    return sub_options.get_integer(name);
                }
                ResolvedValue::Integer(integer) => {
                    if option.name == name {
                        return Some(*integer);
                    }
                }
                _ => continue,
            }
        }
        None
    }
}
