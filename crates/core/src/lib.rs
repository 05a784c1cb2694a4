//! Domain model and pure logic for the display-stand inventory service.
//!
//! Nothing in this crate performs I/O. The stores in `presentoir-db` apply
//! the operations defined here to a copy of their collection and persist the
//! result; the API crate renders the derived views.

pub mod catalog;
pub mod error;
pub mod reservation;
pub mod settings;
pub mod stand;
pub mod types;
pub mod views;
