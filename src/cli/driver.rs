//! Console read-evaluate-print loop over a [`ContactStore`].

use super::menu::{render_menu, MenuChoice};
use crate::presentation::{contact_table, TableStyle};
use crate::repositories::{ContactRepository, InMemoryContactRepository};
use crate::services::{ContactStore, ContactUpdate};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const WELCOME: &str = "Welcome to ContactBook!";
const FAREWELL: &str = "Thank you for using our ContactBook!";

/// Drives a contact store from line-oriented input.
///
/// Generic over its input and output so tests can script a session with
/// in-memory buffers; the binary uses locked stdin and stdout.
pub struct ConsoleDriver<I, O, R = InMemoryContactRepository> {
    input: I,
    output: O,
    store: ContactStore<R>,
    table_style: TableStyle,
}

impl<I: BufRead, O: Write, R: ContactRepository> ConsoleDriver<I, O, R> {
    pub fn new(input: I, output: O, store: ContactStore<R>, table_style: TableStyle) -> Self {
        Self {
            input,
            output,
            store,
            table_style,
        }
    }

    /// Run the menu loop until the user exits or input runs out.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the underlying streams are returned; store and
    /// menu errors are printed and the loop continues.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", WELCOME)?;

        loop {
            writeln!(self.output, "{}", render_menu())?;
            let Some(raw) = self.prompt("Enter your choice: ")? else {
                debug!("Input closed, leaving menu loop");
                return Ok(());
            };

            let choice = match raw.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    debug!(input = %raw, "Invalid menu choice");
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            let keep_going = match choice {
                MenuChoice::AddContact => self.add_contact()?,
                MenuChoice::ViewContacts => self.view_contacts()?,
                MenuChoice::SearchContact => self.search_contact()?,
                MenuChoice::DeleteContact => self.delete_contact()?,
                MenuChoice::UpdateContact => self.update_contact()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "{}", FAREWELL)?;
                    info!("User exited");
                    return Ok(());
                }
            };
            if !keep_going {
                debug!("Input closed mid-action, leaving menu loop");
                return Ok(());
            }
        }
    }

    /// The store, for inspection once the loop has finished.
    pub fn store(&self) -> &ContactStore<R> {
        &self.store
    }

    /// Give back the store and output stream.
    pub fn into_parts(self) -> (ContactStore<R>, O) {
        (self.store, self.output)
    }

    // Each action returns Ok(false) when input ended before all fields were read.

    fn add_contact(&mut self) -> io::Result<bool> {
        let Some(fields) = self.prompt_all(&[
            "Enter name: ",
            "Enter phone number: ",
            "Enter email: ",
            "Enter any additional information: ",
        ])?
        else {
            return Ok(false);
        };
        let [name, phone_number, email, additional_information] = fields;

        let message = match self.store.add_contact(
            &name,
            non_empty(phone_number),
            non_empty(email),
            additional_information,
        ) {
            Ok(()) => format!("{} has been added successfully!", name),
            Err(e) => e.to_string(),
        };
        writeln!(self.output, "{}", message)?;
        Ok(true)
    }

    fn view_contacts(&mut self) -> io::Result<bool> {
        let contacts = self.store.view_contacts();
        writeln!(self.output, "List of contacts:")?;
        writeln!(
            self.output,
            "{}",
            contact_table(&contacts).render(self.table_style)
        )?;
        Ok(true)
    }

    fn search_contact(&mut self) -> io::Result<bool> {
        let Some(name) = self.prompt("Enter name: ")? else {
            return Ok(false);
        };

        match self.store.search_contact(&name) {
            Ok(contact) => writeln!(
                self.output,
                "{}",
                contact_table([&contact]).render(self.table_style)
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(true)
    }

    fn delete_contact(&mut self) -> io::Result<bool> {
        let Some(name) = self.prompt("Enter name: ")? else {
            return Ok(false);
        };

        let message = match self.store.delete_contact(&name) {
            Ok(_) => format!("{} has been deleted successfully!", name),
            Err(e) => e.to_string(),
        };
        writeln!(self.output, "{}", message)?;
        Ok(true)
    }

    fn update_contact(&mut self) -> io::Result<bool> {
        let Some(fields) = self.prompt_all(&[
            "Enter name: ",
            "Enter phone number: ",
            "Enter email: ",
            "Enter any other information: ",
        ])?
        else {
            return Ok(false);
        };
        let [name, phone_number, email, additional_information] = fields;

        let mut update = ContactUpdate::new()
            .phone_number(phone_number)
            .email(email);
        if !additional_information.is_empty() {
            update = update.additional_information(additional_information);
        }

        let message = match self.store.update_contact(&name, update) {
            Ok(()) => format!("{} has been updated successfully!", name),
            Err(e) => e.to_string(),
        };
        writeln!(self.output, "{}", message)?;
        Ok(true)
    }

    /// Print `prompt` and read one line. `None` means end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn prompt_all<const N: usize>(
        &mut self,
        prompts: &[&str; N],
    ) -> io::Result<Option<[String; N]>> {
        let mut answers: [String; N] = std::array::from_fn(|_| String::new());
        for (answer, prompt) in answers.iter_mut().zip(prompts) {
            match self.prompt(prompt)? {
                Some(line) => *answer = line,
                None => return Ok(None),
            }
        }
        Ok(Some(answers))
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
