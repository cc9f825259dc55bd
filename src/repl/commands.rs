//! REPL command table

/// A command the REPL understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Catch,
    Exit,
    Explore,
    Help,
    Map,
    MapBack,
}

#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

/// Every command, sorted by name.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "catch",
        description: "Captures a Pokemon based on higher experience points making it more difficult",
        kind: CommandKind::Catch,
    },
    Command {
        name: "exit",
        description: "Exit the Pokedex",
        kind: CommandKind::Exit,
    },
    Command {
        name: "explore",
        description: "Display the encountered Pokemon found at given location area",
        kind: CommandKind::Explore,
    },
    Command {
        name: "help",
        description: "Display a help message",
        kind: CommandKind::Help,
    },
    Command {
        name: "map",
        description: "Display the next 20 location areas",
        kind: CommandKind::Map,
    },
    Command {
        name: "mapb",
        description: "Display the previous 20 location areas",
        kind: CommandKind::MapBack,
    },
];

pub fn lookup(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Trims and lower-cases a raw input line, then splits it into words.
pub fn clean_input(line: &str) -> Vec<String> {
    line.trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
