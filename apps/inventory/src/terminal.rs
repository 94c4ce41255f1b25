//! # Terminal Front End
//!
//! A line-oriented [`InventoryView`] and the command loop that drives it.
//!
//! ## Commands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  list              show every product          → refresh()              │
//! │  search <text>     show names containing text  → filter(text)           │
//! │  add               prompt for each form field  → submit(form)           │
//! │  delete <id>       select a visible row        → delete(selection)      │
//! │  clear             reset the form defaults     → clear_form()           │
//! │  help              this table                                           │
//! │  quit              leave (end of input works too)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reader and writer are generic so the binary can use stdin/stdout and
//! tests can use in-memory buffers.

use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

use artesan_core::{Category, ProductForm, ProductId, ShippingType};

use crate::sync::{DisplayRow, InventorySync};
use crate::view::{InventoryView, Notice, Severity};

const HEADERS: [&str; 8] = [
    "Id", "Name", "Category", "Price", "Stock", "Available", "Supplier", "Shipping",
];

const HELP: &str = "\
Commands:
  list              show every product
  search <text>     show products whose name contains <text>
  add               enter a new product
  delete <id>       delete a product from the current listing
  clear             reset the form to its defaults
  help              show this help
  quit              exit";

// =============================================================================
// Terminal View
// =============================================================================

/// [`InventoryView`] over a reader and a writer.
///
/// Holds the form draft that `add` starts from; `reset_form` replaces it.
pub struct TerminalView<R, W> {
    input: R,
    output: W,
    form: ProductForm,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalView {
            input,
            output,
            form: ProductForm::default(),
        }
    }

    /// Current form draft.
    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    /// Consumes the view, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `label` and reads one line.
    ///
    /// Returns `None` at end of input. The line terminator is stripped.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Writes a line of text.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Prompts for every form field, starting from the current draft.
    ///
    /// A blank answer keeps the draft's value, so a rejected form can be
    /// corrected field by field. The answers become the new draft until the
    /// sync layer resets it. Returns `None` if input ends midway.
    pub fn read_form(&mut self) -> io::Result<Option<ProductForm>> {
        let mut form = self.form.clone();

        let categories = Category::ALL.map(|c| c.as_str()).join(", ");
        let shipping = ShippingType::ALL.map(|s| s.as_str()).join(", ");

        let Some(name) = self.ask("Name", &form.name)? else {
            return Ok(None);
        };
        form.name = name;

        let Some(category) = self.ask(&format!("Category ({categories})"), &form.category)? else {
            return Ok(None);
        };
        form.category = category;

        let Some(price) = self.ask("Price", &form.price)? else {
            return Ok(None);
        };
        form.price = price;

        let Some(stock) = self.ask("Stock", &form.stock)? else {
            return Ok(None);
        };
        form.stock = stock;

        let default_available = if form.available { "Y/n" } else { "y/N" };
        let Some(available) = self.prompt(&format!("Available [{default_available}]: "))? else {
            return Ok(None);
        };
        if let Some(answer) = parse_yes_no(&available) {
            form.available = answer;
        }

        let Some(supplier) = self.ask("Supplier", &form.supplier)? else {
            return Ok(None);
        };
        form.supplier = supplier;

        let Some(shipping_type) =
            self.ask(&format!("Shipping type ({shipping})"), &form.shipping_type)?
        else {
            return Ok(None);
        };
        form.shipping_type = shipping_type;

        self.form = form.clone();
        Ok(Some(form))
    }

    /// Prompts for one field, showing `current` and keeping it on a blank
    /// answer.
    fn ask(&mut self, label: &str, current: &str) -> io::Result<Option<String>> {
        let label = if current.trim().is_empty() {
            format!("{label}: ")
        } else {
            format!("{label} [{current}]: ")
        };
        let answer = self.prompt(&label)?;
        Ok(answer.map(|a| {
            if a.trim().is_empty() {
                current.to_string()
            } else {
                a
            }
        }))
    }

    fn write_table(&mut self, rows: &[DisplayRow]) -> io::Result<()> {
        if rows.is_empty() {
            return writeln!(self.output, "(no products)");
        }

        let cells: Vec<[String; 8]> = rows.iter().map(row_cells).collect();
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header = HEADERS.map(String::from);
        write_line(&mut self.output, &header, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(self.output, "{}", rule.join("-+-"))?;
        for row in &cells {
            write_line(&mut self.output, row, &widths)?;
        }
        writeln!(self.output, "{} product(s)", rows.len())
    }
}

impl<R: BufRead, W: Write> InventoryView for TerminalView<R, W> {
    fn render(&mut self, rows: &[DisplayRow]) {
        if let Err(e) = self.write_table(rows) {
            warn!(error = %e, "Could not write listing");
        }
    }

    fn notify(&mut self, notice: Notice) {
        let tag = match notice.severity {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        if let Err(e) = writeln!(self.output, "[{tag}] {}: {}", notice.title, notice.message) {
            warn!(error = %e, "Could not write notice");
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        match self.prompt(&format!("{prompt} [y/N] ")) {
            Ok(Some(answer)) => parse_yes_no(&answer).unwrap_or(false),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Could not read confirmation");
                false
            }
        }
    }

    fn reset_form(&mut self, defaults: &ProductForm) {
        self.form = defaults.clone();
    }
}

/// `Some(true)` for yes/sí, `Some(false)` for no, `None` otherwise.
fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" | "s" | "si" | "sí" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn row_cells(row: &DisplayRow) -> [String; 8] {
    [
        row.id.to_string(),
        row.name.clone(),
        row.category.clone(),
        row.price.clone(),
        row.stock.to_string(),
        row.available.clone(),
        row.supplier.clone(),
        row.shipping_type.clone(),
    ]
}

fn write_line(out: &mut impl Write, cells: &[String; 8], widths: &[usize; 8]) -> io::Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    writeln!(out, "{}", padded.join(" | ").trim_end())
}

// =============================================================================
// Shell
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    List,
    Search(&'a str),
    Add,
    Delete(&'a str),
    Clear,
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));

        match word.to_lowercase().as_str() {
            "" => Command::Empty,
            "list" | "ls" => Command::List,
            "search" | "find" => Command::Search(rest),
            "add" => Command::Add,
            "delete" | "rm" => Command::Delete(rest),
            "clear" => Command::Clear,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(word),
        }
    }
}

/// Command loop over an [`InventorySync`] with a [`TerminalView`].
pub struct Shell<R, W> {
    sync: InventorySync<TerminalView<R, W>>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(sync: InventorySync<TerminalView<R, W>>) -> Self {
        Shell { sync }
    }

    pub fn into_sync(self) -> InventorySync<TerminalView<R, W>> {
        self.sync
    }

    /// Shows the full listing, then reads commands until `quit` or end of
    /// input.
    ///
    /// Operation failures are already on screen and do not stop the loop;
    /// only terminal I/O errors do.
    pub async fn run(&mut self) -> io::Result<()> {
        self.sync.view_mut().say("ArtesanApp inventory. Type 'help' for commands.")?;
        let _ = self.sync.refresh().await;

        loop {
            let Some(line) = self.sync.view_mut().prompt("> ")? else {
                break;
            };

            match Command::parse(&line) {
                Command::Empty => {}
                Command::List => {
                    let _ = self.sync.refresh().await;
                }
                Command::Search(text) => {
                    let _ = self.sync.filter(text).await;
                }
                Command::Add => {
                    let Some(form) = self.sync.view_mut().read_form()? else {
                        break;
                    };
                    let _ = self.sync.submit(form).await;
                }
                Command::Delete(arg) => {
                    let selection = arg
                        .parse::<ProductId>()
                        .ok()
                        .and_then(|id| self.sync.selection_for(id));
                    let _ = self.sync.delete(selection).await;
                }
                Command::Clear => {
                    self.sync.clear_form();
                    self.sync.view_mut().say("Form cleared.")?;
                }
                Command::Help => self.sync.view_mut().say(HELP)?,
                Command::Quit => break,
                Command::Unknown(word) => {
                    debug!(command = word, "Unknown command");
                    self.sync
                        .view_mut()
                        .say(&format!("Unknown command '{word}'. Type 'help' for commands."))?;
                }
            }
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
