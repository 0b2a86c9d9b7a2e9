//! HTTP client layer — `CatalogHttp`, one signed GET per call.

pub mod client;

pub use client::CatalogHttp;
