use crate::{command::Command, quote_index::QuoteIndex, Result};
use std::{
    io::{BufRead, Write},
    ops::ControlFlow,
};
use tracing::{debug, info};

const HELP: &str = "\
Program Help -
 This program keeps a hash table of movie titles, each mapped to all of its quotes.
 'find' lists every movie whose title contains the text you enter, ignoring case,
 together with its quotes. 'delete' removes every such movie and its quotes.
 'add' stores a quote under an exact title, creating the title if needed.
 'load', 'count' and 'buckets' report the state of the underlying hash table,
 and 'printHT' prints the whole database in the order titles were added.";

/// Interactive command loop over a quote index.
///
/// Reads one command per line from `input` and writes prompts and results to
/// `output`. The loop ends on `exit` or at the end of input.
pub struct Shell<'a, R, W> {
    index: &'a mut QuoteIndex,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(index: &'a mut QuoteIndex, input: R, output: W) -> Self {
        Self {
            index,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.print_menu()?;

        while let Some(line) = self.prompt("\nPlease enter your command: ")? {
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(error) => {
                    debug!(%error, "rejected command");
                    writeln!(
                        self.output,
                        "Invalid command. Please enter a valid command."
                    )?;
                    continue;
                }
            };

            if self.execute(command)?.is_break() {
                return Ok(());
            }
        }

        debug!("end of input");

        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<ControlFlow<()>> {
        debug!(?command, "executing command");

        match command {
            Command::Add => {
                let Some(title) = self.prompt("Enter the Title of the movie quote to add: ")?
                else {
                    return Ok(ControlFlow::Break(()));
                };
                let Some(quote) = self.prompt("Enter the movie quote to be added: ")? else {
                    return Ok(ControlFlow::Break(()));
                };

                self.index.add_quote(title, quote);
                writeln!(self.output, "Movie added to database!")?;
            }
            Command::Delete => {
                let Some(pattern) = self.prompt("Enter a movie title to delete: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                let pattern = pattern.trim();
                let deleted = self.index.delete_titles_containing(pattern);

                if deleted.is_empty() {
                    writeln!(self.output, "No matching movies found for deletion.")?;
                } else {
                    info!(?deleted, "deleted movies");
                    writeln!(self.output, "{pattern} movie(s) deleted successfully.")?;
                }
            }
            Command::Find => {
                let Some(pattern) = self.prompt("Enter a movie title to search: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                let titles = self.index.find_titles_containing(pattern.trim());

                if titles.is_empty() {
                    writeln!(self.output, "Movie not found.")?;
                }

                for title in titles {
                    if let Some(quotes) = self.index.all_quotes_for(title) {
                        write_movie(&mut self.output, title, quotes)?;
                    }
                }
            }
            Command::PrintTable => {
                writeln!(self.output, "PRINTING MOVIE QUOTE DATABASE: \n")?;

                for (title, quotes) in self.index.iter() {
                    write_movie(&mut self.output, title, quotes)?;
                }
            }
            Command::Load => {
                writeln!(
                    self.output,
                    "Current Load Factor: {:?}\nMax Load Factor: {:?}",
                    self.index.load_factor(),
                    self.index.max_load_factor()
                )?;
            }
            Command::Count => {
                writeln!(self.output, "Number of Movies in table: {}", self.index.len())?;
            }
            Command::Buckets => {
                writeln!(
                    self.output,
                    "Number of buckets in the hash table: {}",
                    self.index.occupied_buckets()
                )?;
            }
            Command::Who => {
                writeln!(
                    self.output,
                    "{} {}",
                    env!("CARGO_PKG_NAME"),
                    env!("CARGO_PKG_VERSION")
                )?;
            }
            Command::Help => {
                writeln!(self.output, "\n{HELP}")?;
                self.print_menu()?;
            }
            Command::Exit => {
                writeln!(self.output, "Exiting program. Goodbye!")?;

                return Ok(ControlFlow::Break(()));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nCommands:")?;

        for (name, description) in Command::MENU {
            writeln!(self.output, "{name} - {description}")?;
        }

        Ok(())
    }

    /// Writes a prompt and reads one line. Returns `None` at the end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn write_movie(output: &mut impl Write, title: &str, quotes: &[String]) -> Result<()> {
    writeln!(output, "Movie: {title}")?;

    for quote in quotes {
        writeln!(output, "  - '{quote}'")?;
    }

    Ok(())
}
