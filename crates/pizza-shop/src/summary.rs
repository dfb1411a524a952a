//! The order summary text shown in the confirmation prompt.

use crate::model::{rupees, CartRow};
use std::fmt::{self, Display};

/// Rendered summary of a set of cart rows plus their grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    text: String,
    total: f64,
}

impl OrderSummary {
    pub fn from_rows(rows: &[CartRow]) -> Self {
        let mut text = String::new();
        let mut total = 0.0;
        for row in rows {
            text.push_str(&row_block(row));
            text.push_str("\n\n");
            total += row.line_total();
        }
        text.push_str(&format!("\nTotal Price of the Full Order : {}", rupees(total)));
        Self { text, total }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

impl Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn row_block(row: &CartRow) -> String {
    format!(
        "Pizza: {}, \nSize: {}, \nToppings: {} \nQuantity: {}, \nTotal Price : {}",
        row.pizza_type,
        row.size_label(),
        row.toppings.join(", "),
        row.quantity,
        rupees(row.line_total())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CartRowId, PizzaSize};

    fn chicken_row(quantity: u8) -> CartRow {
        CartRow {
            id: CartRowId(1),
            pizza_type: "Chicken Pizza".to_string(),
            size: Some(PizzaSize::Medium),
            toppings: vec![
                "Cheese".to_string(),
                "Chicken".to_string(),
                "Tomato Sauce".to_string(),
            ],
            quantity,
            unit_price: 1200.0,
        }
    }

    #[test]
    fn test_single_row_block() {
        let summary = OrderSummary::from_rows(&[chicken_row(2)]);

        assert_eq!(summary.total(), 2400.0);
        assert_eq!(
            summary.text(),
            "Pizza: Chicken Pizza, \nSize: Medium, \nToppings: Cheese, Chicken, Tomato Sauce \n\
             Quantity: 2, \nTotal Price : Rs 2400.0\n\n\
             \nTotal Price of the Full Order : Rs 2400.0"
        );
    }

    #[test]
    fn test_total_sums_rows() {
        let mut second = chicken_row(1);
        second.id = CartRowId(2);
        second.unit_price = 1100.0;

        let summary = OrderSummary::from_rows(&[chicken_row(2), second]);
        assert_eq!(summary.total(), 3500.0);
        assert!(summary.text().ends_with("Rs 3500.0"));
    }

    #[test]
    fn test_empty_rows_total_zero() {
        let summary = OrderSummary::from_rows(&[]);
        assert_eq!(summary.text(), "\nTotal Price of the Full Order : Rs 0.0");
    }
}
