/// Session cache and login exchange
pub mod auth;
/// Authenticated client and request pipeline
pub mod client;
/// Application configuration module
pub mod config;
/// Transport trait seen by the resource facades
pub mod interfaces;
/// Resource facades, one per API resource group
pub mod services;
