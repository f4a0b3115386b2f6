pub mod aggregate;
pub mod reconcile;
pub mod requests;
