//! # Order Mediator
//!
//! Connects one customer with the order manager for a single submission. Neither role
//! refers to the other; the [`OrderMediator`] owns both and relays between them. Each
//! [`Role`] carries its own side of the exchange.
//!
//! ```text
//! customer.send_order ─► mediator.forward ─► manager.request_confirmation
//!                                                 │ yes            │ no
//!                                                 ▼                ▼
//!                                          kitchen pipeline    Cancelled
//! ```

use crate::kitchen::{order_pipeline, DELIVERED_NOTICE};
use crate::model::OrderStatus;
use crate::presenter::{Notice, Presenter};
use crate::summary::OrderSummary;
use order_framework::{PipelineError, PipelineReport};
use tracing::{info, instrument, warn};

pub const CANCELLED_NOTICE: &str = "OK !  Add a new Pizza Order.";
pub const ORDER_ERROR_NOTICE: &str = "Order Error...";

/// The two parties of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Customer { name: String },
    OrderManager,
}

impl Role {
    /// Name the role speaks under in notices.
    pub fn speaker(&self) -> &str {
        match self {
            Role::Customer { name } => name,
            Role::OrderManager => "Order Manager",
        }
    }

    /// The customer's side: announce the order and hand it to the mediator.
    #[instrument(skip(self, mediator, summary), fields(customer = self.speaker()))]
    pub async fn send_order(
        &self,
        mediator: &OrderMediator<'_>,
        summary: &OrderSummary,
    ) -> OrderOutcome {
        mediator.presenter.notify(Notice::notification(format!(
            "{} : Sending the Pizza Order...",
            self.speaker()
        )));
        mediator.forward(summary).await
    }

    /// The manager's side: ask for confirmation, then start a fresh kitchen chain.
    pub async fn request_confirmation(
        &self,
        presenter: &dyn Presenter,
        summary: &OrderSummary,
    ) -> OrderOutcome {
        let question = format!(
            "{} : Can you confirm this Pizza Order?\n\n{}",
            self.speaker(),
            summary
        );
        if !presenter.confirm(&question).await {
            info!("Order declined");
            presenter.notify(Notice::information(CANCELLED_NOTICE));
            return OrderOutcome::Cancelled;
        }

        info!(total = summary.total(), "Order confirmed");
        self.dispatch(presenter, OrderStatus::Confirmed)
    }

    /// Runs the kitchen chain starting from `status`.
    pub fn dispatch(&self, presenter: &dyn Presenter, mut status: OrderStatus) -> OrderOutcome {
        let result = order_pipeline().run(&mut status, |_, notice| {
            presenter.notify(Notice::notification(notice));
        });

        match result {
            Ok(report) => {
                presenter.notify(Notice::information(DELIVERED_NOTICE));
                OrderOutcome::Delivered(report)
            }
            Err(e) => {
                warn!(error = %e, %status, "Kitchen chain aborted");
                presenter.notify(Notice::warning(ORDER_ERROR_NOTICE));
                OrderOutcome::Aborted(e)
            }
        }
    }
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    /// Confirmed and every kitchen step ran.
    Delivered(PipelineReport),
    /// The manager declined.
    Cancelled,
    /// A kitchen step found the wrong status.
    Aborted(PipelineError),
}

/// Holds both roles and relays between them.
pub struct OrderMediator<'a> {
    customer: Role,
    manager: Role,
    app_name: String,
    presenter: &'a dyn Presenter,
}

impl<'a> OrderMediator<'a> {
    pub fn new(
        customer_name: impl Into<String>,
        app_name: impl Into<String>,
        presenter: &'a dyn Presenter,
    ) -> Self {
        Self {
            customer: Role::Customer {
                name: customer_name.into(),
            },
            manager: Role::OrderManager,
            app_name: app_name.into(),
            presenter,
        }
    }

    /// Starts a submission on the customer's behalf.
    pub async fn run(&self, summary: &OrderSummary) -> OrderOutcome {
        self.customer.send_order(self, summary).await
    }

    /// Passes the order on to the manager.
    pub async fn forward(&self, summary: &OrderSummary) -> OrderOutcome {
        self.presenter.notify(Notice::notification(format!(
            "{} App : Finding and Forwarding the Pizza Order...",
            self.app_name
        )));
        self.manager.request_confirmation(self.presenter, summary).await
    }
}
