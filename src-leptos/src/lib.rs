//! Secure Files - Leptos page enhancer library

pub mod api;
pub mod app;
pub mod bindings;
pub mod config;
pub mod dom;
pub mod enhancers;
