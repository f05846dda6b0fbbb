//! Domain model: money, the medicine catalog, orders, pricing and the payment
//! rules. Nothing in here performs I/O except through the [`ports::Console`]
//! trait.

pub mod catalog;
pub mod money;
pub mod order;
pub mod payment;
pub mod ports;
pub mod pricing;
