//! Weighted rarity distributions for the reverse-holo and rare slots.
//!
//! Both samplers consume one uniform roll and map it through a cumulative
//! breakpoint table; the breakpoints are game-balance constants and must not
//! be derived or normalized.

use crate::{RngState, SetFamily, CHAMPIONS_PATH_SET_ID, SHINING_FATES_SET_ID};

/// Premium tiers a reverse-holo slot can upgrade into, per family.
pub const SWORD_SHIELD_PREMIUM_POOL: &[&str] = &[
    "Rare Holo",
    "Rare Holo V",
    "Rare Holo VMAX",
    "Rare Holo VSTAR",
    "Rare Ultra",
    "Rare Secret",
    "Rare Rainbow",
    "Rare Shiny",
    "Trainer Gallery Rare Holo",
    "Radiant Rare",
    "Amazing Rare",
];

pub const SCARLET_VIOLET_PREMIUM_POOL: &[&str] = &[
    "Double Rare",
    "Illustration Rare",
    "Ultra Rare",
    "Special Illustration Rare",
    "Hyper Rare",
];

/// Cumulative permille breakpoints for the rare slot; a roll in 1..=1000 that
/// is <= the bound selects the tier, first match wins.
type RareSlotTable = &'static [(u16, &'static str)];

const CHAMPIONS_PATH_RARE_SLOT: RareSlotTable = &[
    (400, "Rare Holo"),
    (650, "Rare Holo V"),
    (850, "Rare Holo VMAX"),
    (900, "Amazing Rare"),
    (950, "Rare Ultra"),
    (980, "Rare Secret"),
    (1000, "Rare Shiny"),
];

const SHINING_FATES_RARE_SLOT: RareSlotTable = &[
    (400, "Rare"),
    (600, "Rare Holo"),
    (750, "Rare Holo V"),
    (850, "Rare Holo VMAX"),
    (900, "Amazing Rare"),
    (950, "Rare Ultra"),
    (970, "Rare Secret"),
    (1000, "Rare Shiny"),
];

const SWORD_SHIELD_RARE_SLOT: RareSlotTable = &[
    (432, "Rare"),
    (687, "Rare Holo"),
    (838, "Rare Holo V"),
    (891, "Rare Holo VMAX"),
    (917, "Rare Holo VSTAR"),
    (940, "Rare Ultra"),
    (960, "Radiant Rare"),
    (980, "Amazing Rare"),
    (987, "Rare Secret"),
    (998, "Rare Rainbow"),
    (999, "Trainer Gallery Rare Holo"),
    (1000, "Rare Shiny"),
];

const SCARLET_VIOLET_RARE_SLOT: RareSlotTable = &[
    (649, "Rare"),
    (784, "Double Rare"),
    (860, "Illustration Rare"),
    (925, "Ultra Rare"),
    (965, "Shiny Rare"),
    (995, "Shiny Ultra Rare"),
    (998, "Special Illustration Rare"),
    (1000, "Hyper Rare"),
];

pub fn premium_pool(family: SetFamily) -> &'static [&'static str] {
    match family {
        SetFamily::SwordShield => SWORD_SHIELD_PREMIUM_POOL,
        _ => SCARLET_VIOLET_PREMIUM_POOL,
    }
}

/// Rarity distribution shared by the two reverse-holo slots: mostly the base
/// tiers, with a small chance of a premium upgrade.
pub fn roll_reverse_holo_rarity(family: SetFamily, rng: &mut RngState) -> &'static str {
    let roll = rng.roll(1, 100);
    if roll <= 50 {
        return "Common";
    }
    if roll <= 80 {
        return "Uncommon";
    }
    if roll <= 95 {
        return "Rare";
    }
    if family == SetFamily::ScarletViolet && roll <= 97 {
        return "ACE SPEC Rare";
    }
    rng.pick(premium_pool(family)).copied().unwrap_or("Rare")
}

/// Rarity distribution for the final pack slot, keyed by set id; two sets
/// carry bespoke odds overriding their family table.
pub fn roll_rare_slot_rarity(set_id: u32, rng: &mut RngState) -> &'static str {
    let Some(table) = rare_slot_table(set_id) else {
        return "Rare";
    };
    let roll = rng.roll(1, 1000) as u16;
    pick_band(table, roll)
}

fn rare_slot_table(set_id: u32) -> Option<RareSlotTable> {
    match set_id {
        CHAMPIONS_PATH_SET_ID => Some(CHAMPIONS_PATH_RARE_SLOT),
        SHINING_FATES_SET_ID => Some(SHINING_FATES_RARE_SLOT),
        18..=32 => Some(SWORD_SHIELD_RARE_SLOT),
        2..=15 => Some(SCARLET_VIOLET_RARE_SLOT),
        _ => None,
    }
}

fn pick_band(table: RareSlotTable, roll: u16) -> &'static str {
    for (bound, label) in table {
        if roll <= *bound {
            return label;
        }
    }
    // Tables end at 1000, the roll never exceeds it.
    table.last().map(|(_, label)| *label).unwrap_or("Rare")
}
