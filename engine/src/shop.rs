//! Shop - the root coordinator holding all mutable state.
//!
//! The Shop owns the catalog, the cart, the search query and overlay state.
//! Every transition returns a fresh [`ShopSnapshot`] and publishes it to
//! subscribers, so rendering is decoupled from state changes.

use crate::{
    error::Result, search, Cart, CartLine, CartView, Catalog, Error, IncrementPolicy, Intent,
    LineChange, Price, Product, ProductId, Quantity, ShopSnapshot,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identifier returned by [`Shop::subscribe`].
pub type SubscriptionId = u64;

type Subscriber = Box<dyn FnMut(&ShopSnapshot)>;

/// One line of a finalized order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: Quantity,
    pub line_total: Price,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product.id,
            name: line.product.name.clone(),
            unit_price: line.product.price,
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

/// The contents of a cart at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub lines: Vec<OrderLine>,
    pub total_items: u64,
    pub total_price: Price,
}

impl Order {
    fn from_cart(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(OrderLine::from).collect(),
            total_items: cart.total_item_count(),
            total_price: cart.total_price(),
        }
    }
}

/// Result of dispatching an intent.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// The intent that was handled
    pub intent: Intent,
    /// What happened to the cart, for cart intents
    pub change: Option<LineChange>,
    /// The finalized order, for a checkout of a non-empty cart
    pub order: Option<Order>,
    /// State after the transition
    pub snapshot: ShopSnapshot,
}

/// The root coordinator.
pub struct Shop {
    catalog: Catalog,
    cart: Cart,
    query: String,
    selected: Option<Arc<Product>>,
    detail_open: bool,
    cart_open: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: SubscriptionId,
}

impl fmt::Debug for Shop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shop")
            .field("catalog", &self.catalog)
            .field("cart", &self.cart)
            .field("query", &self.query)
            .field("selected", &self.selected.as_ref().map(|p| p.id))
            .field("detail_open", &self.detail_open)
            .field("cart_open", &self.cart_open)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Shop {
    /// Create a shop over a catalog with an empty cart and closed overlays.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_policy(catalog, IncrementPolicy::default())
    }

    /// Create a shop whose cart uses the given increment policy.
    pub fn with_policy(catalog: Catalog, policy: IncrementPolicy) -> Self {
        Self {
            catalog,
            cart: Cart::with_policy(policy),
            query: String::new(),
            selected: None,
            detail_open: false,
            cart_open: false,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Get the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Get the current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the selected product.
    pub fn selected(&self) -> Option<&Arc<Product>> {
        self.selected.as_ref()
    }

    /// Check if the detail overlay is open.
    pub fn is_detail_open(&self) -> bool {
        self.detail_open
    }

    /// Check if the cart overlay is open.
    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Compute the current snapshot without notifying subscribers.
    pub fn snapshot(&self) -> ShopSnapshot {
        let products = search::filter(&self.catalog, &self.query);
        let no_matches = products.is_empty() && !self.query.is_empty();

        ShopSnapshot {
            query: self.query.clone(),
            products,
            no_matches,
            cart: CartView::from(&self.cart),
            selected: self.selected.clone(),
            detail_open: self.detail_open,
            cart_open: self.cart_open,
        }
    }

    /// Register a callback invoked with every new snapshot.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ShopSnapshot) + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    fn publish(&mut self) -> ShopSnapshot {
        let snapshot = self.snapshot();
        for (_, callback) in &mut self.subscribers {
            callback(&snapshot);
        }
        snapshot
    }

    fn resolve(&self, id: ProductId) -> Result<Arc<Product>> {
        self.catalog
            .get(id)
            .cloned()
            .ok_or(Error::ProductNotFound(id))
    }

    /// Handle an intent, resolving product ids against the catalog.
    ///
    /// Fails only when the intent names a product id the catalog does not
    /// know. Removing an unknown id is a no-op, not an error.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Transition> {
        let (change, order) = match &intent {
            Intent::SearchChanged { query } => {
                self.query.clone_from(query);
                (None, None)
            }
            Intent::AddToCart { product_id } => {
                let product = self.resolve(*product_id)?;
                (Some(self.cart.add(&product)), None)
            }
            Intent::AddSelected => (Some(self.add_selected_inner()), None),
            Intent::ViewDetails { product_id } => {
                let product = self.resolve(*product_id)?;
                self.view_details_inner(product);
                (None, None)
            }
            Intent::Increment { product_id } => {
                let product = self.resolve(*product_id)?;
                (Some(self.cart.increment(&product)), None)
            }
            Intent::Decrement { product_id } => {
                let product = self.resolve(*product_id)?;
                (Some(self.cart.decrement(&product)), None)
            }
            Intent::RemoveFromCart { product_id } => (Some(self.cart.remove(*product_id)), None),
            Intent::OpenCart => {
                self.cart_open = true;
                (None, None)
            }
            Intent::CloseCart => {
                self.cart_open = false;
                (None, None)
            }
            Intent::CloseDetail => {
                self.close_detail_inner();
                (None, None)
            }
            Intent::Checkout => {
                let order = self.checkout_inner();
                (None, order)
            }
        };

        let snapshot = self.publish();
        Ok(Transition {
            intent,
            change,
            order,
            snapshot,
        })
    }

    /// Replace the search query.
    pub fn search(&mut self, query: impl Into<String>) -> ShopSnapshot {
        self.query = query.into();
        self.publish()
    }

    /// Add one unit of a catalog product to the cart.
    pub fn add(&mut self, id: ProductId) -> Result<ShopSnapshot> {
        let product = self.resolve(id)?;
        self.cart.add(&product);
        Ok(self.publish())
    }

    /// Increment a cart line (see [`IncrementPolicy`] for absent lines).
    pub fn increment(&mut self, id: ProductId) -> Result<ShopSnapshot> {
        let product = self.resolve(id)?;
        self.cart.increment(&product);
        Ok(self.publish())
    }

    /// Decrement a cart line, removing it at quantity 1.
    pub fn decrement(&mut self, id: ProductId) -> Result<ShopSnapshot> {
        let product = self.resolve(id)?;
        self.cart.decrement(&product);
        Ok(self.publish())
    }

    /// Remove a cart line.
    pub fn remove(&mut self, id: ProductId) -> ShopSnapshot {
        self.cart.remove(id);
        self.publish()
    }

    /// Select a catalog product and open the detail overlay.
    pub fn view_details(&mut self, id: ProductId) -> Result<ShopSnapshot> {
        let product = self.resolve(id)?;
        self.view_details_inner(product);
        Ok(self.publish())
    }

    /// Clear the selection and close the detail overlay.
    pub fn close_detail(&mut self) -> ShopSnapshot {
        self.close_detail_inner();
        self.publish()
    }

    /// Add the product shown in the detail overlay and close the overlay.
    ///
    /// Does nothing when no product is shown.
    pub fn add_selected(&mut self) -> ShopSnapshot {
        self.add_selected_inner();
        self.publish()
    }

    /// Show the cart overlay.
    pub fn open_cart(&mut self) -> ShopSnapshot {
        self.cart_open = true;
        self.publish()
    }

    /// Hide the cart overlay. Cart contents are kept.
    pub fn close_cart(&mut self) -> ShopSnapshot {
        self.cart_open = false;
        self.publish()
    }

    /// Finalize the order, clear the cart and close the cart overlay.
    ///
    /// Returns `None` for the order when the cart was already empty.
    pub fn checkout(&mut self) -> (Option<Order>, ShopSnapshot) {
        let order = self.checkout_inner();
        (order, self.publish())
    }

    fn view_details_inner(&mut self, product: Arc<Product>) {
        self.selected = Some(product);
        self.detail_open = true;
    }

    fn close_detail_inner(&mut self) {
        self.selected = None;
        self.detail_open = false;
    }

    fn add_selected_inner(&mut self) -> LineChange {
        let product = match (&self.selected, self.detail_open) {
            (Some(product), true) => Arc::clone(product),
            _ => return LineChange::Unchanged,
        };

        let change = self.cart.add(&product);
        self.close_detail_inner();
        change
    }

    fn checkout_inner(&mut self) -> Option<Order> {
        let order = if self.cart.is_empty() {
            None
        } else {
            Some(Order::from_cart(&self.cart))
        };

        self.cart.clear();
        self.cart_open = false;
        order
    }
}
