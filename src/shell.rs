//! Interactive menu
//!
//! A numbered menu over any line-based input and output. Every failure is
//! reported with an `[ERROR]` line and the menu is shown again; only I/O
//! errors on the shell's own streams end the loop early.

use std::io::{self, BufRead, Write};

use strum::IntoEnumIterator;
use tracing::{info, warn};

use crate::error::{RailFenceError, Result};
use crate::fence::{FenceKey, KeyError, MAX_RAILS, MIN_RAILS};
use crate::session::Session;
use crate::source::TextSource;
use crate::types::MenuOption;

const BANNER: &str = "Rail Fence Cipher";

/// Menu loop driving a [`Session`]
pub struct Shell<S, R, W> {
    source: S,
    input: R,
    output: W,
    session: Session,
}

impl<S, R, W> Shell<S, R, W>
where
    S: TextSource,
    R: BufRead,
    W: Write,
{
    /// Shell with an empty session
    pub fn new(source: S, input: R, output: W) -> Self {
        Self {
            source,
            input,
            output,
            session: Session::new(),
        }
    }

    /// Pre-enter a key (e.g. from the configuration file)
    pub fn with_key(mut self, key: FenceKey) -> Self {
        self.session.set_key(key);
        self
    }

    /// Session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        info!("interactive shell started");
        loop {
            self.show_options()?;

            let Some(line) = self.read_line()? else {
                info!("input closed, leaving shell");
                break;
            };

            let Some(option) = MenuOption::parse(&line) else {
                writeln!(
                    self.output,
                    "[ERROR] Invalid input. Select an option between 1 and {}.",
                    MenuOption::last()
                )?;
                continue;
            };

            if option == MenuOption::Quit {
                writeln!(self.output, "[INFO] System shutting down...please wait...")?;
                break;
            }

            match self.handle(option) {
                Ok(()) => {}
                Err(RailFenceError::Io(e)) => return Err(e),
                Err(e) => {
                    warn!(%option, error = %e, "menu action failed");
                    writeln!(self.output, "[ERROR] {}", e)?;
                }
            }
        }
        info!("interactive shell stopped");
        Ok(())
    }

    fn handle(&mut self, option: MenuOption) -> Result<()> {
        match option {
            MenuOption::SelectSource => self.select_source(),
            MenuOption::EnterKey => self.enter_key(),
            MenuOption::Encrypt => self.encrypt(),
            MenuOption::Decrypt => self.decrypt(),
            MenuOption::DisplayFence => self.display_fence(),
            MenuOption::Quit => Ok(()),
        }
    }

    fn show_options(&mut self) -> io::Result<()> {
        let rule = "#".repeat(BANNER.len() + 10);
        writeln!(self.output)?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "#    {}    #", BANNER)?;
        writeln!(self.output, "{}", rule)?;
        for option in MenuOption::iter() {
            writeln!(self.output, "{}. {}", option.number(), option)?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "Select Option [1-{}]>", MenuOption::last())?;
        self.output.flush()
    }

    /// Next input line without its line ending; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        writeln!(self.output, "[INFO] {}", message)?;
        self.output.flush()?;
        self.read_line()?
            .ok_or_else(|| RailFenceError::validation("Input ended before a value was entered"))
    }

    fn prompt_number(&mut self, message: &str) -> Result<usize> {
        let answer = self.prompt(message)?;
        let answer = answer.trim();
        answer
            .parse()
            .map_err(|_| RailFenceError::validation(format!("'{}' is not a whole number", answer)))
    }

    fn select_source(&mut self) -> Result<()> {
        let location = self.prompt("Select File or URL:")?;
        let text = self.source.fetch(&location)?;
        info!(location = location.trim(), chars = text.chars().count(), "text loaded");
        self.session.load_text(text);
        writeln!(self.output, "[INFO] Input accepted.")?;
        Ok(())
    }

    fn enter_key(&mut self) -> Result<()> {
        let rails = self.prompt_number(&format!(
            "Enter Rail Fence Key between {} & {}:",
            MIN_RAILS, MAX_RAILS
        ))?;
        if !(MIN_RAILS..=MAX_RAILS).contains(&rails) {
            return Err(KeyError::RailsOutOfRange { rails }.into());
        }

        let position = self.prompt_number(&format!(
            "Enter Rail Fence Start Position between 1 and {}:",
            rails
        ))?;
        let key = FenceKey::from_one_based(rails, position)?;
        self.session.set_key(key);
        writeln!(self.output, "[INFO] Key accepted ({}).", key)?;
        Ok(())
    }

    fn encrypt(&mut self) -> Result<()> {
        writeln!(self.output, "[INFO] Encrypt")?;
        let ciphertext = self.session.encrypt()?;
        writeln!(self.output, "{}", ciphertext)?;
        Ok(())
    }

    fn decrypt(&mut self) -> Result<()> {
        writeln!(self.output, "[INFO] Decrypt")?;
        let plaintext = self.session.decrypt()?;
        writeln!(self.output, "{}", plaintext)?;
        Ok(())
    }

    fn display_fence(&mut self) -> Result<()> {
        writeln!(self.output, "[INFO] Display Rail Fence")?;
        let diagram = self.session.render()?;
        writeln!(self.output, "{}", diagram)?;
        Ok(())
    }
}
