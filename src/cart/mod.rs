//! Shopping cart.
//!
//! The cart is plain data changed through [`reduce`]; the UI dispatches one
//! [`CartAction`] per click and re-renders from the returned cart.
//!
//! # Example
//!
//! ```
//! use storefront::cart::*;
//! use storefront::core::Product;
//! use rust_decimal_macros::dec;
//!
//! let filter = Product::new("SKU-2", "Filter cartridge", dec!(899.50));
//! let cart = reduce(Cart::default(), CartAction::Add { product: filter, quantity: 2 });
//! let cart = reduce(cart, CartAction::Increment("SKU-2".into()));
//! assert_eq!(cart.item_count(), 3);
//! assert_eq!(cart.subtotal(), dec!(2698.50));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::Product;

/// Upper bound for the quantity of a single cart line.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// One product in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: Decimal,
    /// Always between 1 and [`MAX_LINE_QUANTITY`].
    pub quantity: u32,
}

impl CartLine {
    /// `unit_price × quantity`.
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Deserializing a cart (e.g. restoring it from session storage) goes through
/// [`Cart::from_lines`], so stored quantities are brought back into range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredCart")]
pub struct Cart {
    lines: Vec<CartLine>,
}

#[derive(Deserialize)]
struct StoredCart {
    #[serde(default)]
    lines: Vec<CartLine>,
}

impl From<StoredCart> for Cart {
    fn from(stored: StoredCart) -> Self {
        Cart::from_lines(stored.lines)
    }
}

impl Cart {
    /// Build a cart from lines of unknown origin.
    ///
    /// Lines with quantity 0 are dropped, quantities above
    /// [`MAX_LINE_QUANTITY`] are capped and lines for the same product are
    /// merged.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Cart::default();
        for line in lines {
            if line.quantity == 0 {
                warn!(product_id = %line.product_id, "dropping cart line with quantity 0");
                continue;
            }
            match cart.position(&line.product_id) {
                Some(idx) => {
                    let next = cart.lines[idx].quantity.saturating_add(line.quantity);
                    cart.set_at(idx, next);
                }
                None => {
                    if line.quantity > MAX_LINE_QUANTITY {
                        warn!(product_id = %line.product_id, quantity = line.quantity, "capping cart line quantity");
                    }
                    cart.lines.push(CartLine {
                        quantity: line.quantity.min(MAX_LINE_QUANTITY),
                        ..line
                    });
                }
            }
        }
        cart
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.product_id == product_id)
    }

    /// Set the quantity of line `idx`, removing it at zero.
    fn set_at(&mut self, idx: usize, quantity: u32) {
        if quantity == 0 {
            self.lines.remove(idx);
        } else {
            self.lines[idx].quantity = quantity.min(MAX_LINE_QUANTITY);
        }
    }
}

/// A change requested by the customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add `quantity` units; merges with an existing line for the same product.
    Add { product: Product, quantity: u32 },
    Increment(String),
    /// Decrease by one; a line at 1 is removed.
    Decrement(String),
    /// Set an exact quantity; 0 removes the line.
    SetQuantity { product_id: String, quantity: u32 },
    Remove(String),
    Clear,
}

/// Apply `action` to `cart`.
///
/// Quantities are capped at [`MAX_LINE_QUANTITY`]. Actions naming a product
/// that is not in the cart leave it unchanged.
pub fn reduce(mut cart: Cart, action: CartAction) -> Cart {
    debug!(?action, "cart action");
    match action {
        CartAction::Add { product, quantity } => {
            if quantity == 0 {
                return cart;
            }
            match cart.position(&product.id) {
                Some(idx) => {
                    let next = cart.lines[idx].quantity.saturating_add(quantity);
                    cart.set_at(idx, next);
                }
                None => cart.lines.push(CartLine {
                    product_id: product.id,
                    name: product.name,
                    unit_price: product.unit_price,
                    quantity: quantity.min(MAX_LINE_QUANTITY),
                }),
            }
        }
        CartAction::Increment(id) => {
            if let Some(idx) = cart.position(&id) {
                let next = cart.lines[idx].quantity.saturating_add(1);
                cart.set_at(idx, next);
            }
        }
        CartAction::Decrement(id) => {
            if let Some(idx) = cart.position(&id) {
                let next = cart.lines[idx].quantity.saturating_sub(1);
                cart.set_at(idx, next);
            }
        }
        CartAction::SetQuantity {
            product_id,
            quantity,
        } => {
            if let Some(idx) = cart.position(&product_id) {
                cart.set_at(idx, quantity);
            }
        }
        CartAction::Remove(id) => cart.lines.retain(|l| l.product_id != id),
        CartAction::Clear => cart.lines.clear(),
    }
    cart
}
