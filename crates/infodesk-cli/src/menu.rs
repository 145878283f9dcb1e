//! Interactive menu for running operations one after another.
//!
//! The menu reads a choice and the inputs it needs from a line-oriented
//! reader, and turns them into the same [`Commands`] the command line
//! produces. Free-text inputs keep their spaces and case; only the line
//! ending is removed.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use infodesk_core::params::ProviderLookup;

use crate::args::{Commands, PathArgs, ProviderArgs, ServiceArgs, UpdateServiceArgs};

const MENU: &str = "\
1 - Report Health Provider Information
2 - Report Health Service Information
3 - Report Path Information
4 - Update Health Service Information
q - Quit
";

/// Line-oriented menu over any reader and writer.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompts until a complete command is entered.
    ///
    /// Returns `None` when the user quits or input ends.
    pub fn next_command(&mut self) -> Result<Option<Commands>> {
        loop {
            write!(self.output, "\n{MENU}\n> ")?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                return Ok(None);
            };

            let command = match choice.trim() {
                "1" => {
                    let Some(raw) = self.prompt("Enter Provider ID: ")? else {
                        return Ok(None);
                    };
                    match raw.parse::<ProviderLookup>() {
                        Ok(lookup) => Commands::Provider(ProviderArgs { id: lookup.id }),
                        Err(e) => {
                            writeln!(self.output, "{e}")?;
                            continue;
                        }
                    }
                }
                "2" => {
                    let Some(name) = self.prompt("Enter Health Service Name: ")? else {
                        return Ok(None);
                    };
                    Commands::Service(ServiceArgs { name })
                }
                "3" => {
                    let Some(start) = self.prompt("Enter Starting Location: ")? else {
                        return Ok(None);
                    };
                    let Some(end) = self.prompt("Enter Ending Location: ")? else {
                        return Ok(None);
                    };
                    Commands::Path(PathArgs { start, end })
                }
                "4" => {
                    let Some(service) = self.prompt("Enter Health Service Name: ")? else {
                        return Ok(None);
                    };
                    let Some(location) = self.prompt("Enter New Location: ")? else {
                        return Ok(None);
                    };
                    Commands::UpdateService(UpdateServiceArgs { service, location })
                }
                "q" | "Q" | "quit" => return Ok(None),
                "" => continue,
                other => {
                    writeln!(self.output, "Invalid option: {other}")?;
                    continue;
                }
            };

            return Ok(Some(command));
        }
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        writeln!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}
