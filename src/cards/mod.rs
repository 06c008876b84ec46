//! Card system: definitions and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a card definition (not an instance)
//! - `CardKind`: The card kinds the playout interprets
//! - `CardDefinition`: Static card data (cost, power, toughness)
//! - `CardRegistry`: Card definition lookup plus the built-in demo set

pub mod definition;
pub mod registry;

pub use definition::{CardDefinition, CardId, CardKind};
pub use registry::CardRegistry;
