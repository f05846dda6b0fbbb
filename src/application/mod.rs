//! Application layer: the counter workflow.
//!
//! [`session::Session`] collects the customer, runs the order-taking loop in
//! [`ordering`] until checkout, then hands the freshly computed total to the
//! payment dialogue in [`payment`].

pub mod ordering;
pub mod payment;
pub mod session;
