//! Command-line protocol definitions.
//!
//! One command per line. Plain words map to intents (`add 3`, `search gun`);
//! a line starting with `{` is decoded as a JSON-encoded [`Intent`].

use storefront_engine::{Intent, ProductId};

use crate::error::{AppError, Result};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward to the shop.
    Intent(Intent),
    /// Re-render the current state.
    Show,
    /// Print the command reference.
    Help,
    /// End the session.
    Quit,
}

/// Command reference printed by `help`.
pub const HELP: &str = "\
Commands:
  search <text>   filter products by name (search with no text clears)
  view <id>       open the product detail
  close           close the product detail
  buy             add the product in the detail view to the cart
  add <id>        add a product to the cart
  inc <id>        increase quantity in the cart
  dec <id>        decrease quantity in the cart
  rm <id>         remove a product from the cart
  cart            open the cart
  close-cart      close the cart
  checkout        place the order
  show            show the shop again
  help            show this help
  quit            leave the shop
A line starting with '{' is read as a JSON intent, e.g. {\"type\":\"addToCart\",\"productId\":1}";

impl Command {
    /// Parse one input line.
    ///
    /// Blank lines parse to [`Command::Show`].
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let trimmed = line.trim_start();

        if trimmed.starts_with('{') {
            return serde_json::from_str(trimmed)
                .map(Command::Intent)
                .map_err(|e| AppError::BadCommand(format!("invalid JSON intent: {}", e)));
        }

        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" | "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            // Separator runs are dropped; inner and trailing whitespace is kept
            "search" | "find" => Command::Intent(Intent::SearchChanged {
                query: rest.trim_start().to_string(),
            }),
            "view" => Command::Intent(Intent::ViewDetails {
                product_id: parse_id(word, rest)?,
            }),
            "close" => Command::Intent(Intent::CloseDetail),
            "buy" => Command::Intent(Intent::AddSelected),
            "add" => Command::Intent(Intent::AddToCart {
                product_id: parse_id(word, rest)?,
            }),
            "inc" | "+" => Command::Intent(Intent::Increment {
                product_id: parse_id(word, rest)?,
            }),
            "dec" | "-" => Command::Intent(Intent::Decrement {
                product_id: parse_id(word, rest)?,
            }),
            "rm" | "remove" => Command::Intent(Intent::RemoveFromCart {
                product_id: parse_id(word, rest)?,
            }),
            "cart" => Command::Intent(Intent::OpenCart),
            "close-cart" => Command::Intent(Intent::CloseCart),
            "checkout" => Command::Intent(Intent::Checkout),
            other => {
                return Err(AppError::BadCommand(format!(
                    "unknown command: {} (try 'help')",
                    other
                )))
            }
        };

        Ok(command)
    }
}

fn parse_id(word: &str, rest: &str) -> Result<ProductId> {
    let arg = rest.trim();
    if arg.is_empty() {
        return Err(AppError::BadCommand(format!("{} needs a product id", word)));
    }
    arg.parse()
        .map_err(|_| AppError::BadCommand(format!("not a product id: {}", arg)))
}
