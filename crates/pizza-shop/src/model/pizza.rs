//! The [`Pizza`] value and its fluent [`PizzaBuilder`].

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Flat fee added for every topping on a pizza.
pub const TOPPING_FEE: f64 = 50.0;

/// Renders an amount the way receipts show it: `Rs 1200.0`.
pub fn rupees(amount: f64) -> String {
    // Debug keeps the trailing ".0" on whole amounts, Display drops it.
    format!("Rs {:?}", amount)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PizzaSize {
    Small,
    Medium,
    Large,
}

impl Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PizzaSize::Small => "Small",
            PizzaSize::Medium => "Medium",
            PizzaSize::Large => "Large",
        };
        f.write_str(label)
    }
}

/// Label for an optional size; an unset size renders blank.
pub fn size_label(size: Option<PizzaSize>) -> String {
    size.map(|s| s.to_string()).unwrap_or_default()
}

/// An immutable pizza snapshot.
///
/// Built only through [`PizzaBuilder`]. The price is derived from the fields at the point
/// of use, so two snapshots never share pricing state.
#[derive(Debug, Clone, PartialEq)]
pub struct Pizza {
    pizza_type: String,
    size: Option<PizzaSize>,
    base_price: f64,
    toppings: Vec<String>,
}

impl Pizza {
    pub fn builder() -> PizzaBuilder {
        PizzaBuilder::default()
    }

    pub fn pizza_type(&self) -> &str {
        &self.pizza_type
    }

    pub fn size(&self) -> Option<PizzaSize> {
        self.size
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }

    /// `base_price + TOPPING_FEE * toppings`.
    pub fn total_price(&self) -> f64 {
        self.base_price + TOPPING_FEE * self.toppings.len() as f64
    }
}

impl Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pizza: {}, \nSize: {}, \nToppings: {} \nPrice of One : {}",
            self.pizza_type,
            size_label(self.size),
            self.toppings.join(", "),
            rupees(self.total_price())
        )
    }
}

/// Fluent builder for [`Pizza`].
///
/// Nothing is validated: an unset type stays blank, an unset size stays `None` and an
/// unset base price is zero. `build` borrows, so one builder can stamp out several
/// independent snapshots.
///
/// ```rust
/// use pizza_shop::model::{Pizza, PizzaSize};
///
/// let pizza = Pizza::builder()
///     .pizza_type("Chicken Pizza")
///     .size(PizzaSize::Medium)
///     .base_price(1050.0)
///     .toppings(["Cheese", "Chicken", "Tomato Sauce"])
///     .build();
///
/// assert_eq!(pizza.total_price(), 1200.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PizzaBuilder {
    pizza_type: String,
    size: Option<PizzaSize>,
    base_price: f64,
    toppings: Vec<String>,
}

impl PizzaBuilder {
    pub fn pizza_type(mut self, pizza_type: impl Into<String>) -> Self {
        self.pizza_type = pizza_type.into();
        self
    }

    pub fn size(mut self, size: impl Into<Option<PizzaSize>>) -> Self {
        self.size = size.into();
        self
    }

    pub fn base_price(mut self, base_price: f64) -> Self {
        self.base_price = base_price;
        self
    }

    /// Appends one topping.
    pub fn topping(mut self, topping: impl Into<String>) -> Self {
        self.toppings.push(topping.into());
        self
    }

    /// Appends every topping in order.
    pub fn toppings<I, S>(mut self, toppings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.toppings.extend(toppings.into_iter().map(Into::into));
        self
    }

    pub fn build(&self) -> Pizza {
        Pizza {
            pizza_type: self.pizza_type.clone(),
            size: self.size,
            base_price: self.base_price,
            toppings: self.toppings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_grows_fifty_per_topping() {
        for n in 0..=12 {
            let pizza = Pizza::builder()
                .base_price(1050.0)
                .toppings((0..n).map(|i| format!("topping {i}")))
                .build();
            assert_eq!(pizza.total_price(), 1050.0 + 50.0 * n as f64);
        }
    }

    #[test]
    fn test_unset_fields_stay_blank() {
        let pizza = Pizza::builder().build();

        assert_eq!(pizza.pizza_type(), "");
        assert_eq!(pizza.size(), None);
        assert_eq!(pizza.total_price(), 0.0);
        assert_eq!(
            pizza.to_string(),
            "Pizza: , \nSize: , \nToppings:  \nPrice of One : Rs 0.0"
        );
    }

    #[test]
    fn test_builds_are_independent_snapshots() {
        let builder = Pizza::builder().pizza_type("Veggie Pizza").topping("Cheese");
        let first = builder.build();
        let second = builder.topping("Vegetable").build();

        assert_eq!(first.toppings(), ["Cheese"]);
        assert_eq!(second.toppings(), ["Cheese", "Vegetable"]);
    }

    #[test]
    fn test_display_matches_receipt_line() {
        let pizza = Pizza::builder()
            .pizza_type("Chicken Pizza")
            .size(PizzaSize::Medium)
            .base_price(1050.0)
            .toppings(["Cheese", "Chicken", "Tomato Sauce"])
            .build();

        assert_eq!(
            pizza.to_string(),
            "Pizza: Chicken Pizza, \nSize: Medium, \nToppings: Cheese, Chicken, Tomato Sauce \nPrice of One : Rs 1200.0"
        );
    }

    #[test]
    fn test_rupees_keeps_fraction() {
        assert_eq!(rupees(2400.0), "Rs 2400.0");
        assert_eq!(rupees(1075.5), "Rs 1075.5");
    }
}
