//! Ordered rarity ladders walked when a target rarity has no drawable cards.
//! The walk always terminates with a card id: ladder tiers first, then any
//! valid card in the set, then the default id.

use crate::{pick_random, Catalog, RngState, SetFamily};

/// Last-resort card id when a set has no valid entries at all.
pub const DEFAULT_CARD_ID: usize = 1;

/// Full ladders, strongest tier first.
pub const SWORD_SHIELD_LADDER: &[&str] = &[
    "Rare Shiny",
    "Trainer Gallery Rare Holo",
    "Rare Rainbow",
    "Rare Secret",
    "Amazing Rare",
    "Radiant Rare",
    "Rare Ultra",
    "Rare Holo VSTAR",
    "Rare Holo VMAX",
    "Rare Holo V",
    "Rare Holo",
    "Rare",
    "Uncommon",
    "Common",
];

pub const SCARLET_VIOLET_LADDER: &[&str] = &[
    "Hyper Rare",
    "Special Illustration Rare",
    "Shiny Ultra Rare",
    "Shiny Rare",
    "Ultra Rare",
    "Illustration Rare",
    "Double Rare",
    "Rare",
    "ACE SPEC Rare",
    "Uncommon",
    "Common",
];

const PROMO_LADDER: &[&str] = &["Promo"];

/// Ladder for a family; the rare slot drops the two weakest tiers so it never
/// degrades to Uncommon/Common (the full-catalog scan still covers them).
fn ladder_for(family: SetFamily, is_rare_slot: bool) -> &'static [&'static str] {
    let full = match family {
        SetFamily::SwordShield => SWORD_SHIELD_LADDER,
        SetFamily::ScarletViolet => SCARLET_VIOLET_LADDER,
        _ => PROMO_LADDER,
    };
    if is_rare_slot && full.len() > 2 {
        &full[..full.len() - 2]
    } else {
        full
    }
}

/// Walk the family ladder from `start_rarity` toward the weak end and return
/// the first rarity with a drawable card. Cannot fail: exhausting the ladder
/// degrades to the first valid card in the set, then to `DEFAULT_CARD_ID`.
pub fn fallback_card(
    catalog: &Catalog,
    set_code: &str,
    set_id: u32,
    start_rarity: &str,
    is_rare_slot: bool,
    rng: &mut RngState,
) -> usize {
    let ladder = ladder_for(SetFamily::from_set_id(set_id), is_rare_slot);
    let start = match ladder.iter().position(|rarity| *rarity == start_rarity) {
        Some(index) => index,
        None => {
            log::warn!(
                "fallback rarity '{start_rarity}' not in the ladder for set '{set_code}', \
                 starting from the strongest tier"
            );
            0
        }
    };

    for rarity in &ladder[start..] {
        if let Some(id) = pick_random(catalog, set_code, rarity, rng) {
            log::debug!("fallback to '{rarity}' in set '{set_code}', card id {id}");
            return id;
        }
    }

    // Ladder exhausted: any valid card in the set, in id order.
    if let Some(set) = catalog.get(set_code) {
        if let Some(id) = set.card_ids().find(|&id| set.entry_is_valid(id)) {
            log::warn!("no ladder rarity available in set '{set_code}', using card id {id}");
            return id;
        }
    }

    log::warn!("no valid cards in set '{set_code}', using default card id {DEFAULT_CARD_ID}");
    DEFAULT_CARD_ID
}
