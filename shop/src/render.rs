//! Text views: the product grid, the detail overlay and the cart overlay.
//!
//! Views are pure functions of a [`ShopSnapshot`]. They never touch shop
//! state; user actions go back through [`Command`](crate::command::Command).

use std::fmt;

use storefront_engine::{Price, Product, ShopSnapshot};

use crate::receipt::Receipt;

const RULE: &str = "------------------------------------------------------------";

/// Renders snapshots and receipts.
///
/// Prices are printed with two decimals followed by the currency label.
#[derive(Debug, Clone)]
pub struct Renderer {
    title: String,
    currency: String,
}

impl Renderer {
    /// Create a renderer with a heading and currency label.
    pub fn new(title: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            currency: currency.into(),
        }
    }

    /// View of the whole shop: header, search, grid and open overlays.
    pub fn shop<'a>(&'a self, snapshot: &'a ShopSnapshot) -> ShopView<'a> {
        ShopView {
            renderer: self,
            snapshot,
        }
    }

    /// Order confirmation for a receipt.
    pub fn receipt<'a>(&'a self, receipt: &'a Receipt) -> ReceiptView<'a> {
        ReceiptView {
            renderer: self,
            receipt,
        }
    }

    fn price(&self, amount: Price) -> String {
        format!("{:.2} {}", amount, self.currency)
    }
}

/// Display adapter for a full shop snapshot.
pub struct ShopView<'a> {
    renderer: &'a Renderer,
    snapshot: &'a ShopSnapshot,
}

impl ShopView<'_> {
    fn header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self.snapshot.cart.total_items;
        if items > 0 {
            writeln!(f, "{}    [cart: {}]", self.renderer.title, items)?;
        } else {
            writeln!(f, "{}    [cart]", self.renderer.title)?;
        }
        writeln!(f, "{}", RULE)
    }

    fn search(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.snapshot.query.is_empty() {
            writeln!(f, "Search: (all products)")?;
        } else {
            writeln!(f, "Search: \"{}\"", self.snapshot.query)?;
        }
        if self.snapshot.no_matches {
            writeln!(f, "! Sorry, nothing matches your search")?;
        }
        Ok(())
    }

    fn grid(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for product in &self.snapshot.products {
            self.card(f, product)?;
        }
        Ok(())
    }

    fn card(&self, f: &mut fmt::Formatter<'_>, product: &Product) -> fmt::Result {
        write!(
            f,
            "[{}] {} - {}",
            product.id,
            product.name,
            self.renderer.price(product.price)
        )?;
        match self.snapshot.quantity_in_cart(product.id) {
            0 => writeln!(f)?,
            quantity => writeln!(f, "  (in cart: {})", quantity)?,
        }
        writeln!(f, "    {}", product.description)
    }

    fn detail(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(product) = self.snapshot.detail() else {
            return Ok(());
        };

        writeln!(f)?;
        writeln!(f, "+== {} ", product.name)?;
        writeln!(f, "| {}", product.description)?;
        writeln!(f, "| Image: {}", product.image_url)?;
        writeln!(f, "| Price: {}", self.renderer.price(product.price))?;
        writeln!(f, "| [buy] add to cart   [close] close")?;
        writeln!(f, "+{}", &RULE[1..])
    }

    fn cart(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.snapshot.cart_open {
            return Ok(());
        }

        let cart = &self.snapshot.cart;
        writeln!(f)?;
        writeln!(f, "+== Shopping cart ")?;
        if cart.is_empty() {
            writeln!(f, "| Your cart is empty")?;
        } else {
            for line in &cart.lines {
                writeln!(
                    f,
                    "| [{}] {}  {} x {} = {}   [dec] [inc] [rm]",
                    line.product.id,
                    line.product.name,
                    line.quantity,
                    self.renderer.price(line.product.price),
                    self.renderer.price(line.line_total)
                )?;
            }
            writeln!(f, "| Total: {}", self.renderer.price(cart.total_price))?;
            writeln!(f, "| [checkout] place order")?;
        }
        writeln!(f, "| [close-cart] close")?;
        writeln!(f, "+{}", &RULE[1..])
    }
}

impl fmt::Display for ShopView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.header(f)?;
        self.search(f)?;
        self.grid(f)?;
        self.detail(f)?;
        self.cart(f)
    }
}

/// Display adapter for an order confirmation.
pub struct ReceiptView<'a> {
    renderer: &'a Renderer,
    receipt: &'a Receipt,
}

impl fmt::Display for ReceiptView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = &self.receipt.order;
        writeln!(
            f,
            "Order #{} placed! Thank you for your purchase.",
            self.receipt.short_number()
        )?;
        for line in &order.lines {
            writeln!(
                f,
                "  {} x {} = {}",
                line.quantity,
                line.name,
                self.renderer.price(line.line_total)
            )?;
        }
        writeln!(
            f,
            "  {} item(s), total {}",
            order.total_items,
            self.renderer.price(order.total_price)
        )
    }
}
