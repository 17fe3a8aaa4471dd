//! Interactive menu loop.
//!
//! A [`Session`] owns the backpack for the whole run and drives it from line
//! input. Every user mistake (bad menu answer, bad quantity, full backpack,
//! unknown name) is reported and the loop continues; only choice 4 or end of
//! input stops it.

use std::io::{BufRead, Write};

use kitbag_core::{Aggregate, DomainError};
use kitbag_inventory::{
    AddItem, Backpack, BackpackCommand, BackpackEvent, Category, ItemName, RemoveItem,
};

use crate::error::ConsoleResult;
use crate::input::LineReader;
use crate::menu::{InvalidChoice, MenuChoice, render_menu};
use crate::table::render_inventory;

pub const BANNER: &str = "=== Basic Inventory System ===";
pub const SEPARATOR: &str = "------------------------------------";
pub const FAREWELL: &str = "Exiting the program. See you later!";

/// What the menu loop got back from one choice prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    Choice(MenuChoice),
    Invalid(InvalidChoice),
    EndOfInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    MenuDisplay,
    AwaitChoice,
    Dispatch(Selection),
    Exit,
}

pub struct Session<R, W> {
    input: LineReader<R>,
    out: W,
    backpack: Backpack,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self::with_backpack(input, out, Backpack::new())
    }

    pub fn with_backpack(input: R, out: W, backpack: Backpack) -> Self {
        Self {
            input: LineReader::new(input),
            out,
            backpack,
        }
    }

    pub fn backpack(&self) -> &Backpack {
        &self.backpack
    }

    pub fn into_parts(self) -> (Backpack, W) {
        (self.backpack, self.out)
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> ConsoleResult<()> {
        tracing::info!(capacity = self.backpack.capacity(), "session started");
        writeln!(self.out, "{BANNER}")?;

        let mut state = State::MenuDisplay;
        loop {
            state = match state {
                State::MenuDisplay => {
                    render_menu(&mut self.out)?;
                    write!(self.out, "Choose an option: ")?;
                    self.out.flush()?;
                    State::AwaitChoice
                }
                State::AwaitChoice => State::Dispatch(self.read_selection()?),
                State::Dispatch(selection) => {
                    writeln!(self.out, "{SEPARATOR}")?;
                    let next = self.dispatch(selection)?;
                    writeln!(self.out, "{SEPARATOR}")?;
                    writeln!(self.out)?;
                    next
                }
                State::Exit => break,
            };
        }

        self.out.flush()?;
        tracing::info!(
            items = self.backpack.len(),
            version = self.backpack.version(),
            "session ended"
        );
        Ok(())
    }

    fn read_selection(&mut self) -> ConsoleResult<Selection> {
        Ok(match self.input.read_line()? {
            None => Selection::EndOfInput,
            Some(line) => match MenuChoice::parse(&line) {
                Ok(choice) => Selection::Choice(choice),
                Err(invalid) => Selection::Invalid(invalid),
            },
        })
    }

    fn dispatch(&mut self, selection: Selection) -> ConsoleResult<State> {
        match selection {
            Selection::Choice(MenuChoice::Add) => self.add_flow()?,
            Selection::Choice(MenuChoice::Remove) => self.remove_flow()?,
            Selection::Choice(MenuChoice::List) => self.list_flow()?,
            Selection::Choice(MenuChoice::Exit) => {
                writeln!(self.out, "{FAREWELL}")?;
                return Ok(State::Exit);
            }
            Selection::EndOfInput => {
                tracing::debug!("end of input at menu prompt");
                writeln!(self.out, "{FAREWELL}")?;
                return Ok(State::Exit);
            }
            Selection::Invalid(invalid) => {
                tracing::debug!(input = %invalid.input, "invalid menu choice");
                writeln!(self.out, "Invalid option. Try again.")?;
            }
        }
        Ok(State::MenuDisplay)
    }

    /// Write `text`, then read one answer line. `None` means input ended.
    fn prompt(&mut self, text: &str) -> ConsoleResult<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.input.read_line()
    }

    fn add_flow(&mut self) -> ConsoleResult<()> {
        // No prompting when there is nowhere to put the item.
        if self.backpack.is_full() {
            return self.report(DomainError::capacity_exceeded(self.backpack.capacity()));
        }

        writeln!(self.out, "--- Add New Item ---")?;
        let Some(name) = self.prompt(&format!("Item name (max {}): ", ItemName::MAX_CHARS))? else {
            return Ok(());
        };
        let Some(category) = self.prompt(&format!("Item category (max {}): ", Category::MAX_CHARS))?
        else {
            return Ok(());
        };
        let Some(quantity) = self.prompt("Quantity: ")? else {
            return Ok(());
        };

        let command = match AddItem::parse(&name, &category, &quantity) {
            Ok(command) => command,
            Err(err) => return self.report(err),
        };

        match self.backpack.execute(&BackpackCommand::AddItem(command)) {
            Ok(events) => {
                for event in &events {
                    log_event(event);
                    if let BackpackEvent::ItemAdded(added) = event {
                        writeln!(self.out)?;
                        writeln!(self.out, "Item '{}' added successfully!", added.item.name())?;
                    }
                }
                Ok(())
            }
            Err(err) => self.report(err),
        }
    }

    fn remove_flow(&mut self) -> ConsoleResult<()> {
        writeln!(self.out, "--- Remove Item ---")?;
        let Some(name) = self.prompt("Enter the name of the item to remove: ")? else {
            return Ok(());
        };
        // Search terms obey the same bound as stored names.
        let name = ItemName::new(&name);

        match self
            .backpack
            .execute(&BackpackCommand::RemoveItem(RemoveItem::new(name.as_str())))
        {
            Ok(events) => {
                for event in &events {
                    log_event(event);
                    if let BackpackEvent::ItemRemoved(removed) = event {
                        writeln!(self.out)?;
                        writeln!(self.out, "Item '{}' removed successfully!", removed.item.name())?;
                    }
                }
                Ok(())
            }
            Err(err) => self.report(err),
        }
    }

    fn list_flow(&mut self) -> ConsoleResult<()> {
        render_inventory(&mut self.out, &self.backpack)?;
        Ok(())
    }

    /// Tell the user why an operation was rejected. The backpack is unchanged.
    fn report(&mut self, err: DomainError) -> ConsoleResult<()> {
        tracing::warn!(error = %err, "operation rejected");
        match err {
            DomainError::CapacityExceeded { capacity } => writeln!(
                self.out,
                "Backpack is full! Cannot add more items (max: {capacity})."
            )?,
            DomainError::Validation(_) => writeln!(self.out, "Error: invalid quantity.")?,
            DomainError::NotFound(name) => {
                writeln!(self.out)?;
                writeln!(self.out, "Error: item '{name}' not found in the backpack.")?;
            }
        }
        Ok(())
    }
}

fn log_event(event: &BackpackEvent) {
    match serde_json::to_string(event) {
        Ok(payload) => tracing::debug!(
            event_type = event.event_type(),
            slot = event.slot(),
            %payload,
            "event applied"
        ),
        Err(err) => tracing::warn!(
            event_type = event.event_type(),
            error = %err,
            "failed to serialize event"
        ),
    }
}
