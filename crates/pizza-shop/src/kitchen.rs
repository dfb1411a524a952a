//! The four kitchen stages an accepted order goes through.
//!
//! Each [`KitchenStep`] requires the status written by the stage before it and writes its
//! own. [`order_pipeline`] lines them up as accept, cook, pack, hand over.

use crate::model::OrderStatus;
use order_framework::{Pipeline, Step};

/// Notice shown once the last stage has run.
pub const DELIVERED_NOTICE: &str = "Your Pizza Order is successful!\nGet it and Enjoy!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KitchenStep {
    Accept,
    Cook,
    Pack,
    Handover,
}

impl KitchenStep {
    /// Status written when the step completes.
    pub fn completes(&self) -> OrderStatus {
        match self {
            KitchenStep::Accept => OrderStatus::Accepted,
            KitchenStep::Cook => OrderStatus::Cooked,
            KitchenStep::Pack => OrderStatus::Packed,
            KitchenStep::Handover => OrderStatus::HandedOver,
        }
    }

    pub fn notice(&self) -> &'static str {
        match self {
            KitchenStep::Accept => "Your Pizza Order is accepted!",
            KitchenStep::Cook => "Your Pizza is being cooked.",
            KitchenStep::Pack => "Your Pizza is being packed.",
            KitchenStep::Handover => "Your Pizza Order is handed over to the driver for delivery.",
        }
    }
}

impl Step<OrderStatus> for KitchenStep {
    fn name(&self) -> &str {
        match self {
            KitchenStep::Accept => "accept",
            KitchenStep::Cook => "cook",
            KitchenStep::Pack => "pack",
            KitchenStep::Handover => "handover",
        }
    }

    fn requires(&self) -> &OrderStatus {
        match self {
            KitchenStep::Accept => &OrderStatus::Confirmed,
            KitchenStep::Cook => &OrderStatus::Accepted,
            KitchenStep::Pack => &OrderStatus::Cooked,
            KitchenStep::Handover => &OrderStatus::Packed,
        }
    }

    fn process(&self, status: &mut OrderStatus) -> String {
        *status = self.completes();
        self.notice().to_string()
    }
}

/// A fresh accept → cook → pack → handover chain.
pub fn order_pipeline() -> Pipeline<OrderStatus> {
    Pipeline::new()
        .then(KitchenStep::Accept)
        .then(KitchenStep::Cook)
        .then(KitchenStep::Pack)
        .then(KitchenStep::Handover)
}
