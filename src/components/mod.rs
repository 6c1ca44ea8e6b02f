//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog chrome. Owners inject behavior through callback
//! props instead of components reaching into shared context.

pub mod header;
