//! Request handlers

pub mod auth;
pub mod charts;
pub mod claims;
pub mod documents;
pub mod fraud;
pub mod health;
pub mod pipeline;
