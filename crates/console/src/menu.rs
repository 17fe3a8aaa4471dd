//! Main menu options and choice parsing.

use std::io::{self, Write};

use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    List,
    Exit,
}

/// A menu answer that is not one of the listed options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid menu choice '{input}'")]
pub struct InvalidChoice {
    pub input: String,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::List,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> i64 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::Remove => 2,
            MenuChoice::List => 3,
            MenuChoice::Exit => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Item",
            MenuChoice::Remove => "Remove Item",
            MenuChoice::List => "List Items",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parse one input line. Non-numeric and out-of-range answers are both invalid.
    pub fn parse(line: &str) -> Result<Self, InvalidChoice> {
        let invalid = || InvalidChoice {
            input: line.to_string(),
        };
        let number: i64 = line.trim().parse().map_err(|_| invalid())?;
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or_else(invalid)
    }
}

pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "--- Menu ---")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }
    Ok(())
}
