//! Employee expense-claims client core.
//!
//! Two controllers sit on top of an abstract [`store::BillStore`]:
//! [`controllers::bills::BillsController`] loads and orders the bill list,
//! [`controllers::new_bill::NewBillController`] runs the new-bill submission
//! workflow (receipt validation, upload, post). Navigation and session lookup
//! are injected collaborators; views are pure markup renderers.

pub mod controllers;
pub mod fixtures;
pub mod navigation;
pub mod services;
pub mod session;
pub mod store;
pub mod views;
