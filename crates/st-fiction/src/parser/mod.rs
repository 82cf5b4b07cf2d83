//! Command parsing and entity resolution.

mod command;
mod resolver;

pub use command::{Command, normalize, parse_command};
pub use resolver::{
    Resolution, find_actor, find_item, find_optional_item, find_topics, narrow, split_syntax,
};
