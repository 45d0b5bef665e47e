pub mod config;
pub mod error;
pub mod ledger;
pub mod request;
pub mod search;
pub mod service;
pub mod store;
pub mod theme;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
