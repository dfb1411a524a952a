use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Progress of a submitted order through the kitchen.
///
/// Each stage of the order pipeline requires the label written by the stage before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Created,
    Confirmed,
    Accepted,
    Cooked,
    Packed,
    HandedOver,
}

impl OrderStatus {
    /// The label shown to users and written to logs.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Created => "Order Created",
            OrderStatus::Confirmed => "Order Confirmed",
            OrderStatus::Accepted => "Order Accepted",
            OrderStatus::Cooked => "Finished cooking",
            OrderStatus::Packed => "Finished packing",
            OrderStatus::HandedOver => "Handed over",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::HandedOver)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
