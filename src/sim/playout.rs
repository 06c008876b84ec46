//! Single-game playout.
//!
//! Plays one complete two-player game as a pure function of
//! `(config, registry, rng)`. The turn structure is a simplified version
//! of the usual flow: untap, draw, play a land, cast what the lands can
//! pay for, attack. A game ends when a seat's life reaches zero, a seat
//! draws from an empty library, or the turn cap elapses (a draw).
//!
//! Both seats play the same greedy policy; variance between games comes
//! entirely from the shuffle and blocker assignment.

use smallvec::SmallVec;

use crate::cards::{CardDefinition, CardId, CardKind, CardRegistry};
use crate::core::{PlayerId, SimRng};
use crate::error::{Result, SimError};

use super::config::SimulationConfig;
use super::outcome::{GameOutcome, Winner};

/// A creature on the battlefield.
#[derive(Clone, Debug)]
struct Permanent {
    power: i64,
    toughness: i64,
    /// Cast this turn; cannot attack yet.
    summoning_sick: bool,
}

/// Per-seat game state.
#[derive(Clone, Debug)]
struct Seat {
    life: i64,
    /// Top of the library is the end of the vec.
    library: Vec<CardId>,
    hand: Vec<CardId>,
    battlefield: Vec<Permanent>,
    lands: i64,
}

impl Seat {
    fn new(life: i64, library: Vec<CardId>) -> Self {
        Self {
            life,
            library,
            hand: Vec::new(),
            battlefield: Vec::new(),
            lands: 0,
        }
    }

    fn draw(&mut self) -> Option<CardId> {
        self.library.pop()
    }
}

fn lookup<'a>(registry: &'a CardRegistry, id: CardId) -> Result<&'a CardDefinition> {
    registry
        .get(id)
        .ok_or_else(|| SimError::internal(format!("{id} missing from registry mid-game")))
}

/// Active and defending seat, in that order.
fn split_seats(seats: &mut [Seat; 2], active: PlayerId) -> (&mut Seat, &mut Seat) {
    let (first, second) = seats.split_at_mut(1);
    if active.index() == 0 {
        (&mut first[0], &mut second[0])
    } else {
        (&mut second[0], &mut first[0])
    }
}

/// Play one complete game.
///
/// Deterministic: the same `(config, registry, rng)` always produces the
/// same outcome. Touches no state outside its own locals.
pub fn play_game(
    config: &SimulationConfig,
    registry: &CardRegistry,
    mut rng: SimRng,
) -> Result<GameOutcome> {
    let base_deck = match &config.deck {
        Some(deck) => deck.clone(),
        None => registry.default_deck(),
    };
    if base_deck.is_empty() {
        return Err(SimError::invalid_argument("deck list is empty"));
    }
    for &id in &base_deck {
        if !registry.contains(id) {
            return Err(SimError::invalid_argument(format!(
                "deck contains unregistered card {id}"
            )));
        }
    }

    let mut seats = [
        Seat::new(config.starting_life, base_deck.clone()),
        Seat::new(config.starting_life, base_deck),
    ];
    for seat in &mut seats {
        rng.shuffle(&mut seat.library);
        for _ in 0..config.starting_hand_size {
            if let Some(card) = seat.draw() {
                seat.hand.push(card);
            }
        }
    }

    let mut cards_played = Vec::new();
    let mut turn: i64 = 0;

    while turn < config.max_turns {
        turn += 1;
        let active = if turn % 2 == 1 {
            PlayerId::new(0)
        } else {
            PlayerId::new(1)
        };

        if let Some(winner) =
            take_turn(registry, &mut seats, active, turn, &mut cards_played, &mut rng)?
        {
            return Ok(GameOutcome::new(winner, cards_played, turn));
        }
    }

    Ok(GameOutcome::new(Winner::Draw, cards_played, turn))
}

/// Run one turn for `active`. Returns `Some(winner)` if the game ended.
fn take_turn(
    registry: &CardRegistry,
    seats: &mut [Seat; 2],
    active: PlayerId,
    turn: i64,
    cards_played: &mut Vec<CardId>,
    rng: &mut SimRng,
) -> Result<Option<Winner>> {
    let (me, them) = split_seats(seats, active);

    // Untap: creatures cast on previous turns may now attack.
    for permanent in &mut me.battlefield {
        permanent.summoning_sick = false;
    }

    // Draw step. The seat going first skips its turn-1 draw.
    // Drawing from an empty library loses the game.
    if turn > 1 {
        match me.draw() {
            Some(card) => me.hand.push(card),
            None => return Ok(Some(Winner::from_seat(active.opponent()))),
        }
    }

    // Play one land per turn.
    let mut land_pos = None;
    for (i, &id) in me.hand.iter().enumerate() {
        if lookup(registry, id)?.is_land() {
            land_pos = Some(i);
            break;
        }
    }
    if let Some(pos) = land_pos {
        let id = me.hand.remove(pos);
        me.lands += 1;
        cards_played.push(id);
    }

    // Main phase: greedily cast the most expensive affordable spell until
    // nothing fits the remaining mana.
    let mut mana = me.lands;
    loop {
        let mut best: Option<(usize, i64)> = None;
        for (i, &id) in me.hand.iter().enumerate() {
            let def = lookup(registry, id)?;
            if def.kind == CardKind::Land || def.mana_cost > mana {
                continue;
            }
            if best.map_or(true, |(_, cost)| def.mana_cost > cost) {
                best = Some((i, def.mana_cost));
            }
        }
        let Some((pos, cost)) = best else { break };

        let id = me.hand.remove(pos);
        mana -= cost;
        cards_played.push(id);

        let def = lookup(registry, id)?;
        match def.kind {
            CardKind::Creature => me.battlefield.push(Permanent {
                power: def.power.unwrap_or(0),
                toughness: def.toughness.unwrap_or(1),
                summoning_sick: true,
            }),
            CardKind::Sorcery => {
                them.life -= def.damage.unwrap_or(0);
                if them.life <= 0 {
                    return Ok(Some(Winner::from_seat(active)));
                }
            }
            CardKind::Land => {}
        }
    }

    // Combat: every creature that can attack does. The defender blocks
    // each attacker with an even-odds coin flip and a random creature.
    // A blocked attacker deals no damage; combatants trade if the
    // opposing stat line allows it.
    let attackers: SmallVec<[usize; 8]> = me
        .battlefield
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.summoning_sick)
        .map(|(i, _)| i)
        .collect();

    let mut dead_attackers: SmallVec<[usize; 8]> = SmallVec::new();
    for &ai in &attackers {
        let (power, toughness) = {
            let a = &me.battlefield[ai];
            (a.power, a.toughness)
        };

        let blocks = !them.battlefield.is_empty() && rng.gen_bool(0.5);
        if blocks {
            if let Some(bi) = rng.choose_index(them.battlefield.len()) {
                let blocker_dies = power >= them.battlefield[bi].toughness;
                let attacker_dies = them.battlefield[bi].power >= toughness;
                if blocker_dies {
                    them.battlefield.swap_remove(bi);
                }
                if attacker_dies {
                    dead_attackers.push(ai);
                }
            }
        } else {
            them.life -= power;
            if them.life <= 0 {
                return Ok(Some(Winner::from_seat(active)));
            }
        }
    }

    // Remove fallen attackers highest-index-first so indices stay valid.
    dead_attackers.sort_unstable_by(|a, b| b.cmp(a));
    for i in dead_attackers {
        me.battlefield.swap_remove(i);
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> CardRegistry {
        CardRegistry::demo_set()
    }

    #[test]
    fn test_playout_is_deterministic() {
        let registry = demo();
        let config = SimulationConfig::default();

        let a = play_game(&config, &registry, SimRng::new(7)).unwrap();
        let b = play_game(&config, &registry, SimRng::new(7)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let registry = demo();
        let config = SimulationConfig::default();

        let outcomes: Vec<_> = (0..20)
            .map(|seed| play_game(&config, &registry, SimRng::new(seed)).unwrap())
            .collect();

        // Not every game can be identical across 20 seeds.
        assert!(outcomes.iter().any(|o| o != &outcomes[0]));
    }

    #[test]
    fn test_outcome_respects_bounds() {
        let registry = demo();
        let config = SimulationConfig::default();

        for seed in 0..50 {
            let outcome = play_game(&config, &registry, SimRng::new(seed)).unwrap();
            assert!(outcome.is_well_formed());
            assert!(outcome.turn_count >= 1);
            assert!(outcome.turn_count <= config.max_turns);
            assert!(outcome.cards_played.iter().all(|&id| registry.contains(id)));
        }
    }

    #[test]
    fn test_lands_only_deck_is_a_draw() {
        let mut registry = CardRegistry::new();
        let mountain = registry.register_auto(|id| CardDefinition::land(id, "Mountain"));

        let config = SimulationConfig::new().with_deck(vec![mountain; 40]);
        let outcome = play_game(&config, &registry, SimRng::new(1)).unwrap();

        // Nobody can deal damage; the turn cap ends the game.
        assert_eq!(outcome.winner, Winner::Draw);
        assert_eq!(outcome.turn_count, config.max_turns);
    }

    #[test]
    fn test_deck_out_loses() {
        let mut registry = CardRegistry::new();
        let mountain = registry.register_auto(|id| CardDefinition::land(id, "Mountain"));

        // Tiny libraries, huge turn cap: both seats exhaust their decks
        // long before the cap, and the seat that draws first loses first.
        let config = SimulationConfig::new()
            .with_deck(vec![mountain; 8])
            .with_starting_hand_size(7)
            .with_max_turns(1000);
        let outcome = play_game(&config, &registry, SimRng::new(1)).unwrap();

        // One card left in each library after opening hands. Seat 1 draws
        // it on turn 2, seat 0 on turn 3, and seat 1 hits the empty
        // library on turn 4.
        assert_eq!(outcome.winner, Winner::PlayerA);
        assert_eq!(outcome.turn_count, 4);
    }

    #[test]
    fn test_empty_deck_rejected() {
        let registry = demo();
        let config = SimulationConfig::new().with_deck(vec![]);

        let err = play_game(&config, &registry, SimRng::new(1)).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_unregistered_card_rejected() {
        let registry = demo();
        let config = SimulationConfig::new().with_deck(vec![CardId::new(9999); 40]);

        let err = play_game(&config, &registry, SimRng::new(1)).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_games_do_finish_with_wins() {
        let registry = demo();
        let config = SimulationConfig::default();

        let wins = (0..50)
            .map(|seed| play_game(&config, &registry, SimRng::new(seed)).unwrap())
            .filter(|o| o.winner != Winner::Draw)
            .count();

        // An aggressive demo deck should close out most games.
        assert!(wins > 25, "only {wins}/50 games had a winner");
    }
}
