//! Interactive session over the contact store.

use crate::domain::ContactId;
use crate::models::{Contact, ContactDraft};
use crate::shell::command::Command;
use crate::shell::table;
use crate::store::ContactStore;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "> ";

/// Whether the command loop keeps going after a command.
enum Flow {
    Continue,
    Exit,
}

/// An interactive shell session.
///
/// The session owns the store and everything the core deliberately does
/// not track: the current selection, the active search filter, and the
/// view (the ordered ids of the rows currently on screen). Row numbers
/// shown in the table index the view; selections are resolved to a
/// [`ContactId`] immediately, so update and delete hit the intended
/// record even when the view is filtered.
///
/// Generic over its reader and writer so tests can drive a full session
/// from a string script.
pub struct Session<R, W> {
    store: ContactStore,
    view: Vec<ContactId>,
    selected: Option<ContactId>,
    filter: Option<String>,
    input: R,
    output: W,
    table_width: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over an existing store.
    pub fn new(store: ContactStore, input: R, output: W, table_width: usize) -> Self {
        let view = store.list_all().iter().map(|c| c.id).collect();
        Self {
            store,
            view,
            selected: None,
            filter: None,
            input,
            output,
            table_width,
        }
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Consume the session, handing the store back.
    pub fn into_store(self) -> ContactStore {
        self.store
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Contact Book - type 'help' for commands")?;
        self.render_view()?;

        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else { break };
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    if let Flow::Exit = self.dispatch(command)? {
                        break;
                    }
                }
                Err(err) => self.notice(&err.to_string())?,
            }
        }

        writeln!(self.output, "Goodbye.")?;
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> io::Result<Flow> {
        debug!(?command, "dispatching shell command");
        match command {
            Command::Add => self.cmd_add(),
            Command::Update => self.cmd_update(),
            Command::Delete => self.cmd_delete(),
            Command::Select(row) => {
                self.cmd_select(row)?;
                Ok(Flow::Continue)
            }
            Command::Search(query) => {
                self.cmd_search(&query)?;
                Ok(Flow::Continue)
            }
            Command::ShowAll => {
                self.reset_view()?;
                Ok(Flow::Continue)
            }
            Command::Clear => {
                self.selected = None;
                self.notice("Selection cleared.")?;
                Ok(Flow::Continue)
            }
            Command::List => {
                self.render_view()?;
                Ok(Flow::Continue)
            }
            Command::Help => {
                self.cmd_help()?;
                Ok(Flow::Continue)
            }
            // Quit is handled by the run loop
            Command::Quit => Ok(Flow::Exit),
        }
    }

    fn cmd_add(&mut self) -> io::Result<Flow> {
        let Some(draft) = self.prompt_draft()? else {
            return Ok(Flow::Exit);
        };
        match self.store.add(&draft) {
            Ok(position) => {
                let name = self
                    .store
                    .get(position)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                self.notice(&format!("Added {}.", name))?;
                self.reset_view()?;
            }
            Err(err) => self.notice(&err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn cmd_update(&mut self) -> io::Result<Flow> {
        let Some(id) = self.selected else {
            self.notice("Please select a contact to update.")?;
            return Ok(Flow::Continue);
        };
        let Some(draft) = self.prompt_draft()? else {
            return Ok(Flow::Exit);
        };
        match self.store.update_by_id(id, &draft) {
            Ok(()) => {
                self.notice("Contact updated.")?;
                self.reset_view()?;
            }
            Err(err) => self.notice(&err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn cmd_delete(&mut self) -> io::Result<Flow> {
        let Some(id) = self.selected else {
            self.notice("Please select a contact to delete.")?;
            return Ok(Flow::Continue);
        };
        match self.store.delete_by_id(id) {
            Ok(removed) => {
                self.notice(&format!("Deleted {}.", removed.name))?;
                self.reset_view()?;
            }
            Err(err) => self.notice(&err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn cmd_select(&mut self, row: usize) -> io::Result<()> {
        let found = self
            .view
            .get(row - 1)
            .copied()
            .and_then(|id| self.store.get_by_id(id));
        match found {
            Some(contact) => {
                self.selected = Some(contact.id);
                let line = format!("Selected {}: {} ({})", row, contact.name, contact.phone);
                self.notice(&line)
            }
            None => {
                self.selected = None;
                self.notice("No such row.")
            }
        }
    }

    fn cmd_search(&mut self, query: &str) -> io::Result<()> {
        match self.store.search(query) {
            Ok(hits) => {
                if hits.is_empty() {
                    self.notice("No contacts found.")?;
                }
                self.view = hits.iter().map(|c| c.id).collect();
                self.filter = Some(query.trim().to_string());
                self.selected = None;
                self.render_view()
            }
            Err(err) => self.notice(&err.to_string()),
        }
    }

    fn cmd_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "Commands:")?;
        writeln!(self.output, "  add              add a contact (prompts for fields)")?;
        writeln!(self.output, "  select <row>     select a displayed row")?;
        writeln!(self.output, "  update           replace the selected contact (prompts for fields)")?;
        writeln!(self.output, "  delete           delete the selected contact")?;
        writeln!(self.output, "  search <text>    filter by name or phone substring")?;
        writeln!(self.output, "  all              show every contact")?;
        writeln!(self.output, "  clear            clear the selection")?;
        writeln!(self.output, "  list             re-render the current view")?;
        writeln!(self.output, "  quit             leave")
    }

    /// Show the full unfiltered list and drop selection and filter.
    ///
    /// Runs after every successful mutation, like the original form's
    /// refresh-then-clear sequence.
    fn reset_view(&mut self) -> io::Result<()> {
        self.filter = None;
        self.selected = None;
        self.view = self.store.list_all().iter().map(|c| c.id).collect();
        self.render_view()
    }

    fn render_view(&mut self) -> io::Result<()> {
        if let Some(query) = &self.filter {
            writeln!(self.output, "Filter: {}", query)?;
        }
        let rows: Vec<&Contact> = self
            .view
            .iter()
            .filter_map(|id| self.store.get_by_id(*id))
            .collect();
        let rendered = table::render_table(&rows, self.table_width);
        write!(self.output, "{}", rendered)
    }

    /// Prompt for the four contact fields. `None` means input ran out.
    fn prompt_draft(&mut self) -> io::Result<Option<ContactDraft>> {
        let Some(name) = self.prompt_field("Name")? else {
            return Ok(None);
        };
        let Some(phone) = self.prompt_field("Phone")? else {
            return Ok(None);
        };
        let Some(email) = self.prompt_field("Email")? else {
            return Ok(None);
        };
        let Some(address) = self.prompt_field("Address")? else {
            return Ok(None);
        };
        Ok(Some(ContactDraft::new(name, phone, email, address)))
    }

    fn prompt_field(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}
