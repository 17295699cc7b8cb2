//! Bounded retry loop around the card-pool lookup: on a miss the slot's
//! rarity is rerolled, and after the attempt budget the fallback ladder takes
//! over with the original rarity.

use crate::{fallback_card, pick_random, roll_reverse_holo_rarity, Catalog, RngState, SetFamily};

pub const MAX_REROLL_ATTEMPTS: u32 = 50;

/// Tiers a rare slot may reroll into, weakest first.
const SWORD_SHIELD_REROLL_POOL: &[&str] = &[
    "Rare",
    "Rare Holo",
    "Rare Holo V",
    "Rare Holo VMAX",
    "Rare Holo VSTAR",
    "Rare Ultra",
    "Radiant Rare",
    "Amazing Rare",
    "Rare Secret",
    "Rare Rainbow",
    "Trainer Gallery Rare Holo",
    "Rare Shiny",
];

const SCARLET_VIOLET_REROLL_POOL: &[&str] = &[
    "Rare",
    "Double Rare",
    "Illustration Rare",
    "Ultra Rare",
    "Shiny Rare",
    "Shiny Ultra Rare",
    "Special Illustration Rare",
    "Hyper Rare",
];

const PROMO_REROLL_POOL: &[&str] = &["Promo"];
const DEFAULT_REROLL_POOL: &[&str] = &["Rare"];

fn rare_reroll_pool(family: SetFamily) -> &'static [&'static str] {
    match family {
        SetFamily::ScarletVioletPromo | SetFamily::SwordShieldPromo => PROMO_REROLL_POOL,
        SetFamily::SwordShield => SWORD_SHIELD_REROLL_POOL,
        SetFamily::ScarletViolet => SCARLET_VIOLET_REROLL_POOL,
        SetFamily::Unknown => DEFAULT_REROLL_POOL,
    }
}

/// Draw a card of `initial_rarity`, rerolling the rarity on every miss: rare
/// slots reroll uniformly from the family pool, reverse-holo slots reroll the
/// full distribution. After `MAX_REROLL_ATTEMPTS` misses the fallback ladder
/// resolves with the original rarity, so a card id is always returned.
pub fn draw_with_reroll(
    catalog: &Catalog,
    set_code: &str,
    set_id: u32,
    initial_rarity: &str,
    is_rare_slot: bool,
    rng: &mut RngState,
) -> usize {
    let family = SetFamily::from_set_id(set_id);
    let mut current: &str = initial_rarity;

    for attempt in 0..MAX_REROLL_ATTEMPTS {
        if let Some(id) = pick_random(catalog, set_code, current, rng) {
            return id;
        }
        log::debug!(
            "attempt {}: no '{current}' cards in set '{set_code}', rerolling",
            attempt + 1
        );
        current = if is_rare_slot {
            rng.pick(rare_reroll_pool(family)).copied().unwrap_or("Rare")
        } else {
            roll_reverse_holo_rarity(family, rng)
        };
    }

    log::warn!(
        "exhausted {MAX_REROLL_ATTEMPTS} reroll attempts for '{initial_rarity}' \
         in set '{set_code}', walking the fallback ladder"
    );
    fallback_card(catalog, set_code, set_id, initial_rarity, is_rare_slot, rng)
}
