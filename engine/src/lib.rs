//! # Storefront Engine
//!
//! A deterministic catalog and shopping-cart state engine.
//!
//! This crate holds the state behind a small storefront: a fixed product
//! catalog, a search filter over it, a cart, and the coordinator that ties
//! them to overlay and selection state. Every state change produces an
//! immutable [`ShopSnapshot`] for the presentation layer to render.
//!
//! ## Design Principles
//!
//! - **No IO**: Engine has no knowledge of terminals, files, or network
//! - **Deterministic**: Same intents always produce the same snapshots
//! - **Total**: Cart operations never fail; missing lines are no-ops
//! - **Testable**: Pure logic, no rendering environment needed
//!
//! ## Core Concepts
//!
//! ### Catalog
//!
//! The [`Catalog`] is an ordered, immutable list of [`Product`]s, loaded
//! once. Products are shared by reference (`Arc<Product>`) with the cart and
//! snapshots, never copied field by field.
//!
//! ### Cart
//!
//! The [`Cart`] keeps one [`CartLine`] per product id, in insertion order.
//! A line with quantity 0 never exists: decrementing a quantity-1 line
//! removes it.
//!
//! ### Intents
//!
//! User actions are expressed as [`Intent`]s, not direct mutations:
//! - [`Intent::SearchChanged`] - Replace the search query
//! - [`Intent::AddToCart`] - Add one unit of a product
//! - [`Intent::Increment`] / [`Intent::Decrement`] - Adjust a cart line
//! - [`Intent::Checkout`] - Finalize the order and clear the cart
//!
//! ### Shop
//!
//! The [`Shop`] owns all mutable state. Each transition returns the new
//! [`ShopSnapshot`] and publishes it to subscribers.
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_engine::{Catalog, Intent, Product, Shop};
//!
//! let catalog = Catalog::new(vec![
//!     Product::new(1, "Portal Gun", "Slightly used", 10.0, "/img/portal-gun.webp"),
//!     Product::new(2, "Plumbus", "Everyone has one", 5.0, "/img/plumbus.webp"),
//! ])
//! .unwrap();
//!
//! let mut shop = Shop::new(catalog);
//! shop.dispatch(Intent::AddToCart { product_id: 1 }).unwrap();
//! shop.dispatch(Intent::AddToCart { product_id: 1 }).unwrap();
//! let snapshot = shop.dispatch(Intent::AddToCart { product_id: 2 }).unwrap().snapshot;
//!
//! assert_eq!(snapshot.cart.total_items, 3);
//! assert_eq!(snapshot.cart.total_price, 25.0);
//!
//! let snapshot = shop.dispatch(Intent::SearchChanged { query: "plum".into() }).unwrap().snapshot;
//! assert_eq!(snapshot.products.len(), 1);
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod intent;
pub mod product;
pub mod search;
pub mod shop;
pub mod snapshot;

// Re-export main types at crate root
pub use cart::{Cart, CartLine, IncrementPolicy, LineChange};
pub use catalog::Catalog;
pub use error::Error;
pub use intent::Intent;
pub use product::Product;
pub use search::filter;
pub use shop::{Order, OrderLine, Shop, SubscriptionId, Transition};
pub use snapshot::{CartLineView, CartView, ShopSnapshot};

/// Type aliases for clarity
pub type ProductId = u64;
pub type Quantity = u32;
pub type Price = f64;
