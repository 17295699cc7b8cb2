//! Booster assembly: slot composition per set family, realized through the
//! rarity distributions, the reroll engine and the fallback ladder.

use crate::{
    draw_with_reroll, fallback_card, pick_random, roll_rare_slot_rarity,
    roll_reverse_holo_rarity, Catalog, DrawnCard, RngState, SetCatalog, SetFamily,
    ENERGY_SET_CODE,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    #[error("no card data for set '{0}'")]
    MissingSet(String),
    #[error("no card data for energy set '{0}'")]
    MissingEnergySet(&'static str),
}

/// Open one booster of the given set. The returned pack always holds exactly
/// `SetFamily::pack_size` cards; a missing or empty catalog for the set (or
/// for the shared energy set) is the only error.
pub fn open_booster(
    catalog: &Catalog,
    set_code: &str,
    set_id: u32,
    rng: &mut RngState,
) -> Result<Vec<DrawnCard>, PackError> {
    let set = catalog
        .get(set_code)
        .filter(|set| set.is_usable())
        .ok_or_else(|| PackError::MissingSet(set_code.to_string()))?;
    let energy = catalog
        .get(ENERGY_SET_CODE)
        .filter(|set| set.is_usable())
        .ok_or(PackError::MissingEnergySet(ENERGY_SET_CODE))?;

    let family = SetFamily::from_set_id(set_id);
    log::debug!(
        "opening a {} booster for set {set_code} (set id {set_id})",
        family.display_name()
    );

    if family.is_promo() {
        return Ok(open_promo_pack(catalog, set, set_code, set_id, rng));
    }
    Ok(open_main_set_pack(catalog, set, energy, set_code, set_id, rng))
}

/// Promo boosters are five independent "Promo" draws.
fn open_promo_pack(
    catalog: &Catalog,
    set: &SetCatalog,
    set_code: &str,
    set_id: u32,
    rng: &mut RngState,
) -> Vec<DrawnCard> {
    let mut cards = Vec::with_capacity(5);
    for _ in 0..5 {
        let id = draw_base_slot(catalog, set_code, set_id, "Promo", rng);
        cards.push(record_card(set, set_code, id, "Promo", "Unknown Card"));
    }
    cards
}

/// Main-set boosters: one energy, four Commons, three Uncommons, two
/// reverse-holo slots and one rare slot, in that order.
fn open_main_set_pack(
    catalog: &Catalog,
    set: &SetCatalog,
    energy: &SetCatalog,
    set_code: &str,
    set_id: u32,
    rng: &mut RngState,
) -> Vec<DrawnCard> {
    let family = SetFamily::from_set_id(set_id);
    let mut cards = Vec::with_capacity(11);

    let energy_id = roll_energy_id(rng);
    cards.push(record_card(
        energy,
        ENERGY_SET_CODE,
        energy_id,
        "Energy",
        "Unknown Energy Card",
    ));

    for _ in 0..4 {
        let id = draw_base_slot(catalog, set_code, set_id, "Common", rng);
        cards.push(record_card(set, set_code, id, "Common", "Unknown Card"));
    }
    for _ in 0..3 {
        let id = draw_base_slot(catalog, set_code, set_id, "Uncommon", rng);
        cards.push(record_card(set, set_code, id, "Uncommon", "Unknown Card"));
    }

    for _ in 0..2 {
        let rarity = roll_reverse_holo_rarity(family, rng);
        let id = draw_with_reroll(catalog, set_code, set_id, rarity, false, rng);
        cards.push(record_card(set, set_code, id, rarity, "Unknown Card"));
    }

    let rarity = roll_rare_slot_rarity(set_id, rng);
    let id = draw_with_reroll(catalog, set_code, set_id, rarity, true, rng);
    cards.push(record_card(set, set_code, id, rarity, "Unknown Card"));

    cards
}

/// The energy slot bypasses the rarity system: fixed id ranges in the shared
/// energy set, with a 1-in-15 chance of the high range.
fn roll_energy_id(rng: &mut RngState) -> usize {
    if rng.roll(1, 15) == 1 {
        rng.roll(9, 16) as usize
    } else {
        rng.roll(1, 8) as usize
    }
}

/// Fixed-rarity slot: one direct pick, then straight to the fallback ladder.
fn draw_base_slot(
    catalog: &Catalog,
    set_code: &str,
    set_id: u32,
    rarity: &str,
    rng: &mut RngState,
) -> usize {
    match pick_random(catalog, set_code, rarity, rng) {
        Some(id) => id,
        None => fallback_card(catalog, set_code, set_id, rarity, false, rng),
    }
}

/// The recorded name/rarity come from the catalog entry; a hole in the
/// catalog keeps the contract with generic labels and the searched rarity.
fn record_card(
    set: &SetCatalog,
    set_code: &str,
    id: usize,
    searched_rarity: &str,
    unknown_name: &str,
) -> DrawnCard {
    let name = match set.name(id) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => unknown_name.to_string(),
    };
    let rarity = match set.rarity(id) {
        Some(rarity) if !rarity.is_empty() => rarity.to_string(),
        _ => searched_rarity.to_string(),
    };
    DrawnCard {
        id: format!("{set_code}:{id}"),
        name,
        rarity,
    }
}
