//! Interactive command loop: menu, selection, one satellite operation per turn.

use std::io::{self, BufRead, Write};

use tracing::{error, info, warn};

use crate::error::CommandError;
use crate::satellite::Satellite;
use crate::state::Orientation;

use super::menu::{MenuChoice, write_menu};

const CHOICE_PROMPT: &str = "Enter your choice (1-6): ";
const DIRECTION_PROMPT: &str = "Enter the rotation direction (North/South/East/West): ";

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Menu-driven front end over a [`Satellite`].
///
/// Generic over its input and output streams so sessions can be scripted.
pub struct Dispatcher<R, W> {
    satellite: Satellite,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Dispatcher<R, W> {
    pub fn new(satellite: Satellite, input: R, output: W) -> Self {
        Self {
            satellite,
            input,
            output,
        }
    }

    pub fn satellite(&self) -> &Satellite {
        &self.satellite
    }

    pub fn into_satellite(self) -> Satellite {
        self.satellite
    }

    /// # Errors
    ///
    /// Returns an `io::Error` if the output cannot be written.
    pub fn show_menu(&mut self) -> io::Result<()> {
        write_menu(&mut self.output)
    }

    /// Runs one menu selection.
    ///
    /// For `Rotate` the typed direction has surrounding whitespace removed
    /// before it is capitalized, so `"  wEST "` becomes `"West"`. Leading
    /// whitespace is not kept as part of the orientation.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidChoice`] for unknown selections, and
    /// the input or satellite error of the selected command otherwise.
    pub fn execute(&mut self, choice: &str) -> Result<Flow, CommandError> {
        let Some(selected) = MenuChoice::parse(choice) else {
            return Err(CommandError::InvalidChoice(choice.to_string()));
        };

        match selected {
            MenuChoice::DisplayState => info!("Current State - {}", self.satellite.state()),
            MenuChoice::Rotate => {
                let direction = self
                    .prompt(DIRECTION_PROMPT)?
                    .ok_or(CommandError::EndOfInput)?;
                let direction = Orientation::capitalize(direction.trim());
                self.satellite.rotate(&direction)?;
            }
            MenuChoice::ActivatePanels => self.satellite.activate_panels()?,
            MenuChoice::DeactivatePanels => self.satellite.deactivate_panels()?,
            MenuChoice::CollectData => {
                self.satellite.collect_data()?;
            }
            MenuChoice::Exit => {
                info!("Exiting the Satellite Command System.");
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Loops until the exit option is chosen or input ends.
    ///
    /// Command errors are logged and the loop carries on.
    pub fn run(&mut self) {
        loop {
            if let Err(e) = self.show_menu() {
                error!("Failed to display menu: {e}");
            }

            let choice = match self.prompt(CHOICE_PROMPT) {
                Ok(Some(choice)) => choice,
                Ok(None) => {
                    info!("Input closed. Exiting the Satellite Command System.");
                    return;
                }
                Err(e) => {
                    error!("Failed to read choice: {e}. Exiting the Satellite Command System.");
                    return;
                }
            };

            match self.execute(&choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return,
                Err(e) if e.is_operator_error() => warn!("{e}"),
                Err(e) => error!("An error occurred while executing the command: {e}"),
            }
        }
    }

    /// Prints `text` and reads one line, without its line terminator.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
