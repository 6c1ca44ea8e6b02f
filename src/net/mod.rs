//! REST helpers for the catalog backend.

pub mod api;
