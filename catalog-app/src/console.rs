//! Line-oriented console driving the list view and the form view.
//!
//! Each input line is one [`Command`]. After every command both views apply
//! their pending notifications and the current page is printed to stdout.
//! Logs go to stderr.

use crate::shutdown::shutdown_signal;
use catalog_core::gateway::ProductGateway;
use catalog_core::views::{ProductForm, ProductListView, error_message};
use catalog_sdk::objects::Product;
use std::str::FromStr;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const HELP: &str = "\
commands:
  list [sort]          reload products (optional sort key, e.g. name, price)
  page <n> | next | prev
  edit <barcode>       load a listed product into the form
  delete <barcode>
  show <barcode>       fetch one product from the server
  set <field> <value>  field: barcode, name, image, rating, price
  tags <a, b, ...>     set the form's tag field
  submit               add or save the form's product
  clear                reset the form
  help | quit";

/// One value typed into the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Barcode(String),
    Name(String),
    Image(String),
    Rating(f64),
    Price(f64),
}

impl FieldValue {
    pub fn apply(self, product: &mut Product) {
        match self {
            FieldValue::Barcode(v) => product.barcode = v,
            FieldValue::Name(v) => product.name = v,
            FieldValue::Image(v) => product.image = v,
            FieldValue::Rating(v) => product.rating = v,
            FieldValue::Price(v) => product.price = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List(String),
    Page(usize),
    Next,
    Prev,
    Edit(String),
    Delete(String),
    Show(String),
    Set(FieldValue),
    Tags(String),
    Submit,
    Clear,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("not a number: {0}")]
    InvalidNumber(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let required = |name: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(name))
            } else {
                Ok(rest.to_string())
            }
        };

        match word {
            "" => Err(CommandError::Empty),
            "list" => Ok(Command::List(rest.to_string())),
            "page" => {
                let page = required("page number")?;
                page.parse::<usize>()
                    .map(Command::Page)
                    .map_err(|_| CommandError::InvalidNumber(page))
            }
            "next" => Ok(Command::Next),
            "prev" => Ok(Command::Prev),
            "edit" => required("barcode").map(Command::Edit),
            "delete" => required("barcode").map(Command::Delete),
            "show" => required("barcode").map(Command::Show),
            "set" => parse_field(rest).map(Command::Set),
            // An empty tag field is valid and means no tags.
            "tags" => Ok(Command::Tags(rest.to_string())),
            "submit" => Ok(Command::Submit),
            "clear" => Ok(Command::Clear),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_field(input: &str) -> Result<FieldValue, CommandError> {
    let (field, value) = match input.split_once(char::is_whitespace) {
        Some((field, value)) => (field, value.trim()),
        None => (input, ""),
    };
    let number = || {
        value
            .parse::<f64>()
            .map_err(|_| CommandError::InvalidNumber(value.to_string()))
    };

    match field {
        "" => Err(CommandError::MissingArgument("field")),
        "barcode" => Ok(FieldValue::Barcode(value.to_string())),
        "name" => Ok(FieldValue::Name(value.to_string())),
        "image" => Ok(FieldValue::Image(value.to_string())),
        "rating" => number().map(FieldValue::Rating),
        "price" => number().map(FieldValue::Price),
        other => Err(CommandError::UnknownField(other.to_string())),
    }
}

/// Render the list view's current page, its status line and the form.
pub fn render<G: ProductGateway>(list: &ProductListView<G>, form: &ProductForm<G>) -> String {
    let mut out = format!(
        "{:<14} {:<24} {:>8} {:>6}  tags\n",
        "barcode", "name", "price", "rating"
    );
    for product in list.visible_products() {
        out.push_str(&format!(
            "{:<14} {:<24} {:>8.2} {:>6.1}  {}\n",
            product.barcode,
            product.name,
            product.price,
            product.rating,
            product.tags.join(", ")
        ));
    }
    out.push_str(&format!(
        "page {} of {} ({} products, {} per page)\n",
        list.current_page(),
        list.page_count(),
        list.products().len(),
        list.page_size()
    ));
    if !list.message().is_empty() {
        out.push_str(&format!("> {}\n", list.message()));
    }

    let draft = form.draft();
    let mode = match form.previous_barcode() {
        Some(previous) => format!("editing {previous}"),
        None => "adding".to_string(),
    };
    out.push_str(&format!(
        "form [{mode}] barcode={:?} name={:?} image={:?} rating={} price={} tags={:?}\n",
        draft.barcode,
        draft.name,
        draft.image,
        draft.rating,
        draft.price,
        form.tags_input()
    ));
    out
}

/// Whether the console keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Console<G> {
    gateway: G,
    list: ProductListView<G>,
    form: ProductForm<G>,
    sort_by: String,
}

impl<G: ProductGateway> Console<G> {
    pub fn new(
        gateway: G,
        list: ProductListView<G>,
        form: ProductForm<G>,
        sort_by: String,
    ) -> Self {
        Self {
            gateway,
            list,
            form,
            sort_by,
        }
    }

    /// Load the list, then read commands from stdin until `quit`, end of
    /// input, or a shutdown signal.
    pub async fn run(mut self) -> std::io::Result<()> {
        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        self.list.load(&self.sort_by).await;
        stdout.write_all(self.screen().as_bytes()).await?;

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            stdout.write_all(b"catalog> ").await?;
            stdout.flush().await?;

            let line = tokio::select! {
                _ = &mut shutdown => break,
                line = lines.next_line() => line?,
            };
            let Some(line) = line else {
                tracing::debug!("End of input");
                break;
            };

            let output = match line.parse::<Command>() {
                Ok(command) => {
                    tracing::debug!(?command, "Executing command");
                    let (flow, extra) = self.execute(command).await;
                    if flow == Flow::Quit {
                        break;
                    }
                    extra + &self.screen()
                }
                Err(CommandError::Empty) => continue,
                Err(e) => format!("{e}\n"),
            };
            stdout.write_all(output.as_bytes()).await?;
        }

        stdout.flush().await
    }

    fn screen(&mut self) -> String {
        self.form.sync();
        self.list.sync();
        render(&self.list, &self.form)
    }

    /// Run one command. Returns any text to show above the refreshed screen.
    async fn execute(&mut self, command: Command) -> (Flow, String) {
        let mut extra = String::new();
        match command {
            Command::List(sort_by) => {
                self.sort_by = sort_by;
                self.list.load(&self.sort_by).await;
            }
            Command::Page(page) => self.list.change_page(page),
            Command::Next => self.list.next_page(),
            Command::Prev => self.list.previous_page(),
            Command::Edit(barcode) => {
                if !self.list.request_edit(&barcode) {
                    extra = format!("no listed product has barcode {barcode}\n");
                }
            }
            Command::Delete(barcode) => self.list.delete(&barcode).await,
            Command::Show(barcode) => {
                extra = match self.gateway.get_one(&barcode).await {
                    Ok(product) => format!("{product:#?}\n"),
                    Err(e) => format!("{}\n", error_message(&e)),
                };
            }
            Command::Set(value) => value.apply(self.form.draft_mut()),
            Command::Tags(tags) => self.form.set_tags_input(tags),
            Command::Submit => {
                self.form.submit().await;
            }
            Command::Clear => self.form.reset(),
            Command::Help => extra = format!("{HELP}\n"),
            Command::Quit => return (Flow::Quit, extra),
        }
        (Flow::Continue, extra)
    }
}
