pub mod cluster;
pub mod config;
pub mod consts;
pub mod dispatch;
pub mod error;
pub mod geo;
pub mod listing;
pub mod selection;
pub mod services;
pub mod session;
pub mod viewport;
pub mod worker;
