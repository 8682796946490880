//! Session - turns input lines into intents and intents into views.
//!
//! A session owns the [`Shop`] for the lifetime of the process. Each line is
//! handled to completion before the next one is read.

use storefront_engine::{Catalog, Intent, Shop, Transition};

use crate::command::{Command, HELP};
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::receipt::Receipt;
use crate::render::Renderer;

/// What the event loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep reading.
    Output(String),
    /// Stop reading input.
    Quit,
}

/// An interactive shopping session.
#[derive(Debug)]
pub struct Session {
    shop: Shop,
    renderer: Renderer,
    output: OutputFormat,
    receipts: Vec<Receipt>,
}

impl Session {
    /// Create a session over a catalog using the configured policy and views.
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        let mut shop = Shop::with_policy(catalog, config.increment_policy);

        shop.subscribe(|snapshot| {
            tracing::trace!(
                products = snapshot.products.len(),
                cart_items = snapshot.cart.total_items,
                detail_open = snapshot.detail_open,
                cart_open = snapshot.cart_open,
                "Snapshot published"
            );
        });

        Self {
            shop,
            renderer: Renderer::new(config.title.clone(), config.currency.clone()),
            output: config.output,
            receipts: Vec::new(),
        }
    }

    /// Get the shop.
    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    /// Receipts issued so far, oldest first.
    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    /// Render the current state.
    pub fn render(&self) -> Result<String> {
        let snapshot = self.shop.snapshot();
        match self.output {
            OutputFormat::Text => Ok(self.renderer.shop(&snapshot).to_string()),
            OutputFormat::Json => Ok(format!("{}\n", snapshot.to_json()?)),
        }
    }

    /// Handle one input line.
    ///
    /// Command and lookup errors leave the shop untouched; the caller reports
    /// them and keeps reading.
    pub fn handle_line(&mut self, line: &str) -> Result<Reply> {
        match Command::parse(line)? {
            Command::Quit => Ok(Reply::Quit),
            Command::Help => Ok(Reply::Output(format!("{}\n", HELP))),
            Command::Show => self.render().map(Reply::Output),
            Command::Intent(intent) => self.handle_intent(intent).map(Reply::Output),
        }
    }

    fn handle_intent(&mut self, intent: Intent) -> Result<String> {
        tracing::debug!(intent = intent.name(), "Handling intent");

        let transition = self.shop.dispatch(intent)?;
        log_transition(&transition);

        let mut out = String::new();

        if let Intent::Checkout = transition.intent {
            match transition.order.clone() {
                Some(order) => {
                    let receipt = Receipt::issue(order);
                    tracing::info!(
                        order_number = %receipt.order_number,
                        items = receipt.order.total_items,
                        total = receipt.order.total_price,
                        "Order placed"
                    );
                    out.push_str(&self.receipt_output(&receipt)?);
                    self.receipts.push(receipt);
                }
                None => {
                    tracing::info!("Checkout with an empty cart");
                    if self.output == OutputFormat::Text {
                        out.push_str("Your cart is empty, nothing to order.\n");
                    }
                }
            }
        }

        match self.output {
            OutputFormat::Text => {
                out.push_str(&self.renderer.shop(&transition.snapshot).to_string());
            }
            OutputFormat::Json => {
                out.push_str(&transition.snapshot.to_json()?);
                out.push('\n');
            }
        }

        Ok(out)
    }

    fn receipt_output(&self, receipt: &Receipt) -> Result<String> {
        match self.output {
            OutputFormat::Text => Ok(format!("{}\n", self.renderer.receipt(receipt))),
            OutputFormat::Json => {
                let json = serde_json::to_string(receipt)?;
                Ok(format!("{}\n", json))
            }
        }
    }
}

fn log_transition(transition: &Transition) {
    let intent = &transition.intent;
    let snapshot = &transition.snapshot;

    match (intent, transition.change) {
        (_, Some(change)) if change.is_change() => {
            tracing::info!(
                intent = intent.name(),
                product_id = ?intent.product_id(),
                change = ?change,
                total_items = snapshot.cart.total_items,
                total_price = snapshot.cart.total_price,
                "Cart updated"
            );
        }
        (_, Some(_)) => {
            tracing::debug!(
                intent = intent.name(),
                product_id = ?intent.product_id(),
                "Cart unchanged"
            );
        }
        (Intent::ViewDetails { product_id }, None) => {
            tracing::info!(product_id = *product_id, "Opened product details");
        }
        (Intent::SearchChanged { query }, None) => {
            tracing::debug!(
                query = %query,
                matches = snapshot.products.len(),
                "Search changed"
            );
        }
        _ => {
            tracing::debug!(intent = intent.name(), "Handled intent");
        }
    }
}
