//! [`ActorEntity`] implementation for [`CartRow`].
//!
//! The quantity limit is not part of the row: it arrives as the actor's context
//! ([`CartLimits`]) and is checked on every create and update.

use super::CartError;
use crate::model::{CartLimits, CartRow, CartRowCreate, CartRowId, CartRowUpdate};
use async_trait::async_trait;
use order_framework::ActorEntity;
use tracing::debug;

fn check_quantity(quantity: u8, limits: &CartLimits) -> Result<(), CartError> {
    if quantity == 0 || quantity > limits.max_quantity {
        return Err(CartError::InvalidQuantity {
            quantity,
            max: limits.max_quantity,
        });
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for CartRow {
    type Id = CartRowId;
    type Create = CartRowCreate;
    type Update = CartRowUpdate;
    type Context = CartLimits;
    type Error = CartError;

    /// Copies the payload into a row, keeping only the first occurrence of each topping.
    fn from_create_params(id: CartRowId, params: CartRowCreate) -> Result<Self, CartError> {
        let mut toppings: Vec<String> = Vec::with_capacity(params.toppings.len());
        for topping in params.toppings {
            if !toppings.contains(&topping) {
                toppings.push(topping);
            }
        }

        Ok(Self {
            id,
            pizza_type: params.pizza_type,
            size: params.size,
            toppings,
            quantity: params.quantity,
            unit_price: params.unit_price,
        })
    }

    async fn on_create(&mut self, limits: &CartLimits) -> Result<(), CartError> {
        check_quantity(self.quantity, limits)?;
        debug!(row = %self.id, pizza = %self.pizza_type, "Row added");
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: CartRowUpdate,
        limits: &CartLimits,
    ) -> Result<(), CartError> {
        check_quantity(update.quantity, limits)?;
        self.quantity = update.quantity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(quantity: u8, toppings: &[&str]) -> CartRowCreate {
        CartRowCreate {
            pizza_type: "Pepperoni Pizza".to_string(),
            size: None,
            toppings: toppings.iter().map(|t| t.to_string()).collect(),
            quantity,
            unit_price: 1200.0,
        }
    }

    #[test]
    fn test_create_drops_repeated_toppings() {
        let row = CartRow::from_create_params(
            CartRowId(1),
            params(1, &["Cheese", "Pepperoni", "Cheese", "Tomato Sauce", "Pepperoni"]),
        )
        .unwrap();

        assert_eq!(row.toppings, ["Cheese", "Pepperoni", "Tomato Sauce"]);
    }

    #[tokio::test]
    async fn test_quantity_must_be_within_limits() {
        let limits = CartLimits::default();

        let mut zero = CartRow::from_create_params(CartRowId(1), params(0, &[])).unwrap();
        assert_eq!(
            zero.on_create(&limits).await,
            Err(CartError::InvalidQuantity { quantity: 0, max: 10 })
        );

        let mut row = CartRow::from_create_params(CartRowId(2), params(10, &[])).unwrap();
        assert!(row.on_create(&limits).await.is_ok());

        let err = row
            .on_update(CartRowUpdate { quantity: 11 }, &limits)
            .await
            .unwrap_err();
        assert_eq!(err, CartError::InvalidQuantity { quantity: 11, max: 10 });
        assert_eq!(row.quantity, 10);
    }
}
