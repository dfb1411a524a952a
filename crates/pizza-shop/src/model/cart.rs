//! Cart rows held by the cart actor.

use crate::command::PricedPizza;
use crate::model::{size_label, PizzaSize};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for cart rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CartRowId(pub u32);

impl From<u32> for CartRowId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartRowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row_{}", self.0)
    }
}

/// Upper bound for a row's quantity, injected into the cart actor at start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLimits {
    pub max_quantity: u8,
}

impl Default for CartLimits {
    fn default() -> Self {
        Self { max_quantity: 10 }
    }
}

/// One line of the pending order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](order_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](order_framework::ResourceActor).
///
/// See [`impl ActorEntity for CartRow`](#impl-ActorEntity-for-CartRow) for details on:
/// - Creation parameters ([`CartRowCreate`])
/// - Update parameters ([`CartRowUpdate`])
/// - Injected limits ([`CartLimits`])
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub id: CartRowId,
    pub pizza_type: String,
    pub size: Option<PizzaSize>,
    pub toppings: Vec<String>,
    pub quantity: u8,
    pub unit_price: f64,
}

impl CartRow {
    /// `unit_price * quantity`.
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    pub fn size_label(&self) -> String {
        size_label(self.size)
    }
}

/// Payload for adding a row.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRowCreate {
    pub pizza_type: String,
    pub size: Option<PizzaSize>,
    pub toppings: Vec<String>,
    pub quantity: u8,
    pub unit_price: f64,
}

impl CartRowCreate {
    /// Copies a priced pizza into a cart line.
    pub fn from_priced(priced: &PricedPizza, quantity: u8) -> Self {
        Self {
            pizza_type: priced.pizza.pizza_type().to_string(),
            size: priced.pizza.size(),
            toppings: priced.pizza.toppings().to_vec(),
            quantity,
            unit_price: priced.unit_price,
        }
    }
}

/// Payload for changing a row's quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartRowUpdate {
    pub quantity: u8,
}
