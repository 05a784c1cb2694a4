pub mod catalog;
pub mod poster_requests;
pub mod public;
pub mod settings;
pub mod stands;
pub mod statistics;
