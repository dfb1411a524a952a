//! # Shop Session
//!
//! Everything one customer does in the shop goes through a [`ShopSession`]: logging in,
//! adding pizzas to the cart, removing rows and submitting the order. The session holds
//! the per-customer state (username, ingredient pool, cart handle), so nothing is kept in
//! process-wide globals.
//!
//! Every failure is reported twice: as a notice through the [`Presenter`] and as a
//! [`ShopError`] to the caller. The session is usable again right after.

use crate::clients::CartClient;
use crate::command::{OrderCommand, PricedPizza};
use crate::config::ShopConfig;
use crate::error::ShopError;
use crate::mediator::{OrderMediator, OrderOutcome};
use crate::model::{CartRow, CartRowCreate, IngredientPool, Menu, Pizza, PizzaSize};
use crate::presenter::{Notice, Presenter};
use crate::summary::OrderSummary;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub const ENTER_USERNAME_NOTICE: &str = "Please enter Your Username";
pub const EMPTY_CART_NOTICE: &str = "Please add your order to the Order List";
pub const SELECT_PIZZA_NOTICE: &str = "Please select a Pizza";
pub const SELECT_TOPPING_NOTICE: &str = "Please select toppings from the menu";
pub const REMOVE_ROW_QUESTION: &str = "Do you want to remove this Pizza Order?";
pub const ROW_REMOVED_NOTICE: &str = "Pizza Order removed!";

/// What the customer picked on the order form.
///
/// Defaults to a medium pizza, quantity one, no extras.
#[derive(Debug, Clone, PartialEq)]
pub struct PizzaSelection {
    pub pizza_type: String,
    pub size: Option<PizzaSize>,
    pub quantity: u8,
    pub extras: Vec<String>,
}

impl PizzaSelection {
    pub fn new(pizza_type: impl Into<String>) -> Self {
        Self {
            pizza_type: pizza_type.into(),
            size: Some(PizzaSize::Medium),
            quantity: 1,
            extras: Vec::new(),
        }
    }

    pub fn size(mut self, size: impl Into<Option<PizzaSize>>) -> Self {
        self.size = size.into();
        self
    }

    pub fn quantity(mut self, quantity: u8) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn extra(mut self, topping: impl Into<String>) -> Self {
        self.extras.push(topping.into());
        self
    }
}

pub struct ShopSession {
    username: Option<String>,
    cart: CartClient,
    ingredients: IngredientPool,
    menu: Menu,
    presenter: Arc<dyn Presenter>,
    shop_name: String,
    base_price: f64,
}

impl ShopSession {
    pub fn new(cart: CartClient, presenter: Arc<dyn Presenter>, config: &ShopConfig) -> Self {
        Self {
            username: None,
            cart,
            ingredients: IngredientPool::new(),
            menu: Menu::standard(),
            presenter,
            shop_name: config.shop_name.clone(),
            base_price: config.base_price,
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Distinct topping names seen by this session.
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Sets the customer name. Blank names are refused and leave the session as it was.
    pub fn login(&mut self, name: &str) -> Result<(), ShopError> {
        let name = name.trim();
        if name.is_empty() {
            warn!("Login without a username");
            self.presenter.notify(Notice::warning(ENTER_USERNAME_NOTICE));
            return Err(ShopError::EmptyUsername);
        }
        info!(username = name, "Logged in");
        self.username = Some(name.to_string());
        Ok(())
    }

    /// Builds, prices and adds one cart row.
    ///
    /// Extras must be on the menu's topping list; they are stored with the menu's spelling,
    /// so case variants collapse into one topping.
    #[instrument(skip(self), fields(pizza = %selection.pizza_type))]
    pub async fn add_pizza(&mut self, selection: PizzaSelection) -> Result<PricedPizza, ShopError> {
        let Some(item) = self.menu.find(&selection.pizza_type) else {
            warn!("Not on the menu");
            self.presenter.notify(Notice::warning(SELECT_PIZZA_NOTICE));
            return Err(ShopError::UnknownPizza(selection.pizza_type));
        };

        let mut extras = Vec::with_capacity(selection.extras.len());
        for extra in &selection.extras {
            let Some(topping) = self.menu.find_extra(extra) else {
                warn!(topping = %extra, "Not an extra topping");
                self.presenter.notify(Notice::warning(SELECT_TOPPING_NOTICE));
                return Err(ShopError::UnknownTopping(extra.clone()));
            };
            extras.push(topping.to_string());
        }

        let base = Pizza::builder()
            .pizza_type(item.name)
            .size(selection.size)
            .base_price(self.base_price)
            .toppings(item.base_toppings())
            .build();
        let command = OrderCommand::for_selection(item.name, selection.size, &extras);
        let priced = command.execute(&base, &extras, &mut self.ingredients);

        let params = CartRowCreate::from_priced(&priced, selection.quantity);
        match self.cart.add_row(params).await {
            Ok(id) => {
                info!(row = %id, unit_price = priced.unit_price, "Pizza added");
                Ok(priced)
            }
            Err(e) => {
                self.presenter.notify(Notice::warning(e.to_string()));
                Err(e.into())
            }
        }
    }

    pub async fn rows(&self) -> Result<Vec<CartRow>, ShopError> {
        Ok(self.cart.rows().await?)
    }

    /// Removes the row at `index` after the user agrees.
    ///
    /// Returns `None` when the user declines.
    #[instrument(skip(self))]
    pub async fn remove_row(&self, index: usize) -> Result<Option<CartRow>, ShopError> {
        let rows = self.cart.rows().await?;
        if index >= rows.len() {
            self.presenter.notify(Notice::warning(SELECT_PIZZA_NOTICE));
            return Err(ShopError::NoRowSelected(index));
        }

        if !self.presenter.confirm(REMOVE_ROW_QUESTION).await {
            return Ok(None);
        }

        let row = self.cart.remove_row(index).await?;
        self.presenter.notify(Notice::success(ROW_REMOVED_NOTICE));
        Ok(Some(row))
    }

    /// Sets the quantity of the row at `index`.
    #[instrument(skip(self))]
    pub async fn change_quantity(&self, index: usize, quantity: u8) -> Result<CartRow, ShopError> {
        let rows = self.cart.rows().await?;
        let Some(row) = rows.get(index) else {
            self.presenter.notify(Notice::warning(SELECT_PIZZA_NOTICE));
            return Err(ShopError::NoRowSelected(index));
        };

        match self.cart.change_quantity(row.id, quantity).await {
            Ok(updated) => Ok(updated),
            Err(e) => {
                self.presenter.notify(Notice::warning(e.to_string()));
                Err(e.into())
            }
        }
    }

    pub async fn summary(&self) -> Result<OrderSummary, ShopError> {
        let rows = self.cart.rows().await?;
        Ok(OrderSummary::from_rows(&rows))
    }

    /// Hands the cart to the order manager and empties it.
    ///
    /// An empty cart or a missing username stops here without reaching the mediator.
    #[instrument(skip(self), fields(username = self.username.as_deref().unwrap_or_default()))]
    pub async fn submit(&self) -> Result<OrderOutcome, ShopError> {
        let Some(username) = self.username.as_deref() else {
            self.presenter.notify(Notice::warning(ENTER_USERNAME_NOTICE));
            return Err(ShopError::EmptyUsername);
        };

        let rows = self.cart.rows().await?;
        if rows.is_empty() {
            warn!("Submit with an empty cart");
            self.presenter.notify(Notice::warning(EMPTY_CART_NOTICE));
            return Err(ShopError::EmptyCart);
        }

        let summary = OrderSummary::from_rows(&rows);
        let mediator = OrderMediator::new(username, self.shop_name.as_str(), self.presenter.as_ref());
        let outcome = mediator.run(&summary).await;

        let cleared = self.cart.clear().await?;
        info!(rows = cleared.len(), total = summary.total(), ?outcome, "Order submitted");
        Ok(outcome)
    }
}
