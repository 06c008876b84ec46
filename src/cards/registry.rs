//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores all card definitions known to the simulator
//! and provides fast lookup by `CardId`. `CardRegistry::demo_set` builds
//! the built-in set the default deck draws from.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardKind};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use mtg_sim::cards::{CardRegistry, CardDefinition, CardId};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::sorcery(CardId::new(1), "Lightning Bolt", 1, 3));
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Lightning Bolt");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
    next_id: u32,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.next_id = self.next_id.max(card.id.raw() + 1);
        self.cards.insert(card.id, card);
    }

    /// Register a card built by `make` with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(&mut self, make: impl FnOnce(CardId) -> CardDefinition) -> CardId {
        let id = CardId::new(self.next_id);
        self.register(make(id));
        id
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// IDs of all registered cards of the given kind.
    pub fn ids_of_kind(&self, kind: CardKind) -> Vec<CardId> {
        let mut ids: Vec<_> = self
            .cards
            .values()
            .filter(|c| c.kind == kind)
            .map(|c| c.id)
            .collect();
        ids.sort();
        ids
    }

    /// The built-in demo set the default deck is assembled from.
    ///
    /// A small red-deck-style pool: one basic land, a creature curve from
    /// one to four mana, and two burn spells.
    #[must_use]
    pub fn demo_set() -> Self {
        let mut registry = Self::new();

        registry.register_auto(|id| CardDefinition::land(id, "Mountain"));
        registry.register_auto(|id| CardDefinition::creature(id, "Goblin Raider", 1, 1, 1));
        registry.register_auto(|id| CardDefinition::creature(id, "Grizzly Bears", 2, 2, 2));
        registry.register_auto(|id| CardDefinition::creature(id, "Gray Ogre", 3, 2, 2));
        registry.register_auto(|id| CardDefinition::creature(id, "Hill Giant", 4, 3, 3));
        registry.register_auto(|id| CardDefinition::sorcery(id, "Lightning Bolt", 1, 3));
        registry.register_auto(|id| CardDefinition::sorcery(id, "Lava Axe", 4, 5));

        registry
    }

    /// The default 40-card deck list: 17 lands, then creatures, then burn.
    ///
    /// Both seats play this deck; per-game variance comes entirely from
    /// the shuffle.
    ///
    /// Panics if the registry has no lands, creatures, or sorceries.
    #[must_use]
    pub fn default_deck(&self) -> Vec<CardId> {
        let lands = self.ids_of_kind(CardKind::Land);
        let creatures = self.ids_of_kind(CardKind::Creature);
        let sorceries = self.ids_of_kind(CardKind::Sorcery);
        assert!(
            !lands.is_empty() && !creatures.is_empty() && !sorceries.is_empty(),
            "default deck needs at least one land, creature, and sorcery"
        );

        let mut deck = Vec::with_capacity(40);
        for i in 0..17 {
            deck.push(lands[i % lands.len()]);
        }

        // 4 copies of each creature, then fill with burn.
        for &creature in &creatures {
            for _ in 0..4 {
                deck.push(creature);
            }
        }
        deck.truncate(40);

        let mut i = 0;
        while deck.len() < 40 {
            deck.push(sorceries[i % sorceries.len()]);
            i += 1;
        }

        deck
    }
}
