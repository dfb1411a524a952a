//! # Order Commands
//!
//! An [`OrderCommand`] takes the base pizza for a menu item plus the extra toppings the
//! customer ticked and produces a [`PricedPizza`], the snapshot that ends up in a cart row.
//!
//! - [`OrderCommand::Default`] keeps the base pizza as it is.
//! - [`OrderCommand::Customize`] may swap type and size, and appends the extras after the
//!   base toppings. Names go through the session's [`IngredientPool`] and repeats are dropped.
//!
//! Neither variant fails: blank fields price as zero and render blank.

use crate::model::{rupees, Ingredient, IngredientPool, Pizza, PizzaSize};
use std::fmt::{self, Display};
use tracing::debug;

/// A pizza snapshot together with the unit price computed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedPizza {
    pub pizza: Pizza,
    pub unit_price: f64,
}

impl PricedPizza {
    pub fn new(pizza: Pizza) -> Self {
        let unit_price = pizza.total_price();
        Self { pizza, unit_price }
    }

    /// Human-readable description shown after adding a pizza.
    pub fn summary(&self) -> String {
        self.pizza.to_string()
    }
}

impl Display for PricedPizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.pizza.pizza_type(), rupees(self.unit_price))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderCommand {
    /// Base toppings only.
    Default,
    /// Rebuild with the given type and size, then add the selected extras.
    Customize {
        pizza_type: String,
        size: Option<PizzaSize>,
    },
}

impl OrderCommand {
    /// Chooses [`OrderCommand::Customize`] as soon as any extra was picked.
    pub fn for_selection(
        pizza_type: &str,
        size: Option<PizzaSize>,
        extras: &[String],
    ) -> Self {
        if extras.is_empty() {
            OrderCommand::Default
        } else {
            OrderCommand::Customize {
                pizza_type: pizza_type.to_string(),
                size,
            }
        }
    }

    pub fn execute(
        &self,
        base: &Pizza,
        extras: &[String],
        pool: &mut IngredientPool,
    ) -> PricedPizza {
        let pizza = match self {
            OrderCommand::Default => Pizza::builder()
                .pizza_type(base.pizza_type())
                .size(base.size())
                .base_price(base.base_price())
                .toppings(base.toppings())
                .build(),
            OrderCommand::Customize { pizza_type, size } => {
                let mut toppings: Vec<Ingredient> = Vec::new();
                for name in base.toppings().iter().chain(extras) {
                    let name = name.trim();
                    if name.is_empty() {
                        continue;
                    }
                    let ingredient = pool.intern(name);
                    if !toppings.contains(&ingredient) {
                        toppings.push(ingredient);
                    }
                }
                Pizza::builder()
                    .pizza_type(pizza_type.as_str())
                    .size(*size)
                    .base_price(base.base_price())
                    .toppings(toppings.iter().map(Ingredient::name))
                    .build()
            }
        };

        let priced = PricedPizza::new(pizza);
        debug!(
            command = ?self,
            toppings = priced.pizza.toppings().len(),
            unit_price = priced.unit_price,
            "Command executed"
        );
        priced
    }
}
