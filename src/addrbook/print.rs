use addrbook::api::{CmdMessage, MessageLevel};
use addrbook::config::BookConfig;
use colored::Colorize;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_config(config: &BookConfig) {
    for key in BookConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}
