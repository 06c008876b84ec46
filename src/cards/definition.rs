//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type.
//! For example, "Lightning Bolt" costs 1 mana and deals 3 damage -
//! these are part of the definition. Per-game state (which zone a copy
//! sits in, damage marked on it) lives in the playout, not here.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// This identifies the "type" of card (e.g., "Lightning Bolt"),
/// not a specific copy in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The card kinds the playout interprets.
///
/// Lands produce mana, creatures attack and block, sorceries deal direct
/// damage to the opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Land,
    Creature,
    Sorcery,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use mtg_sim::cards::{CardDefinition, CardId, CardKind};
///
/// let bear = CardDefinition::creature(CardId::new(1), "Grizzly Bears", 2, 2, 2);
/// assert_eq!(bear.kind, CardKind::Creature);
/// assert_eq!(bear.power, Some(2));
///
/// let bolt = CardDefinition::sorcery(CardId::new(2), "Lightning Bolt", 1, 3);
/// assert_eq!(bolt.damage, Some(3));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Kind the playout interprets.
    pub kind: CardKind,

    /// Generic mana cost. Lands cost 0.
    pub mana_cost: i64,

    /// Attack power (creatures only).
    pub power: Option<i64>,

    /// Toughness (creatures only).
    pub toughness: Option<i64>,

    /// Direct damage dealt on resolution (sorceries only).
    pub damage: Option<i64>,
}

impl CardDefinition {
    /// Create a land definition.
    #[must_use]
    pub fn land(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CardKind::Land,
            mana_cost: 0,
            power: None,
            toughness: None,
            damage: None,
        }
    }

    /// Create a creature definition.
    #[must_use]
    pub fn creature(
        id: CardId,
        name: impl Into<String>,
        mana_cost: i64,
        power: i64,
        toughness: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CardKind::Creature,
            mana_cost,
            power: Some(power),
            toughness: Some(toughness),
            damage: None,
        }
    }

    /// Create a direct-damage sorcery definition.
    #[must_use]
    pub fn sorcery(id: CardId, name: impl Into<String>, mana_cost: i64, damage: i64) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CardKind::Sorcery,
            mana_cost,
            power: None,
            toughness: None,
            damage: None,
        }
        .with_damage(damage)
    }

    fn with_damage(mut self, damage: i64) -> Self {
        self.damage = Some(damage);
        self
    }

    /// Check whether this card is a land.
    #[must_use]
    pub fn is_land(&self) -> bool {
        self.kind == CardKind::Land
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_basics() {
        let id = CardId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Card(7)");
    }

    #[test]
    fn test_card_id_ordering() {
        // Favorite-card tie-breaks rely on CardId ordering.
        assert!(CardId::new(1) < CardId::new(2));
    }

    #[test]
    fn test_land_definition() {
        let mountain = CardDefinition::land(CardId::new(0), "Mountain");
        assert!(mountain.is_land());
        assert_eq!(mountain.mana_cost, 0);
        assert_eq!(mountain.power, None);
    }

    #[test]
    fn test_creature_definition() {
        let bear = CardDefinition::creature(CardId::new(1), "Grizzly Bears", 2, 2, 2);
        assert_eq!(bear.kind, CardKind::Creature);
        assert_eq!(bear.mana_cost, 2);
        assert_eq!(bear.power, Some(2));
        assert_eq!(bear.toughness, Some(2));
    }

    #[test]
    fn test_sorcery_definition() {
        let bolt = CardDefinition::sorcery(CardId::new(2), "Lightning Bolt", 1, 3);
        assert_eq!(bolt.kind, CardKind::Sorcery);
        assert_eq!(bolt.damage, Some(3));
        assert!(!bolt.is_land());
    }

    #[test]
    fn test_serialization() {
        let bear = CardDefinition::creature(CardId::new(1), "Grizzly Bears", 2, 2, 2);
        let json = serde_json::to_string(&bear).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(bear.id, deserialized.id);
        assert_eq!(bear.name, deserialized.name);
    }
}
