use serde::Serialize;

/// Static set-code to numeric set-id table, maintained alongside the card
/// data files. The numeric id selects the family-specific rarity tables.
pub const SET_IDS: &[(&str, u32)] = &[
    ("SVE", 0),
    ("SVP", 1),
    ("SV1", 2),
    ("SV2", 3),
    ("SV3", 4),
    ("SV3PT5", 5),
    ("SV4", 6),
    ("SV4PT5", 7),
    ("SV5", 8),
    ("SV6", 9),
    ("SV6PT5", 10),
    ("SV7", 11),
    ("SV8", 12),
    ("SV8PT5", 13),
    ("SV9", 14),
    ("SV10", 15),
    ("SWSHP", 17),
    ("SWSH1", 18),
    ("SWSH2", 19),
    ("SWSH3", 20),
    ("SWSH35", 21),
    ("SWSH4", 23),
    ("SWSH45", 23),
];

pub fn set_id_for(code: &str) -> Option<u32> {
    SET_IDS
        .iter()
        .find(|(set_code, _)| *set_code == code)
        .map(|(_, id)| *id)
}

/// Unknown codes resolve to id 0, which lands in the unknown family with its
/// degenerate rarity tables.
pub fn set_id_or_default(code: &str) -> u32 {
    set_id_for(code).unwrap_or(0)
}

/// A purchasable booster product.
#[derive(Debug, Clone, Serialize)]
pub struct PackProduct {
    pub code: &'static str,
    pub name: &'static str,
    pub cost: u32,
}

pub const PACK_PRODUCTS: &[PackProduct] = &[
    PackProduct {
        code: "SVP",
        name: "Scarlet & Violet Promo",
        cost: 100,
    },
    PackProduct {
        code: "SV1",
        name: "Paldea Evolved",
        cost: 100,
    },
    PackProduct {
        code: "SV2",
        name: "Scarlet & Violet Base Set",
        cost: 100,
    },
    PackProduct {
        code: "SWSHP",
        name: "Sword & Shield Promo",
        cost: 100,
    },
    PackProduct {
        code: "SWSH1",
        name: "Sword & Shield Base Set",
        cost: 100,
    },
    PackProduct {
        code: "SWSH35",
        name: "Champion's Path",
        cost: 120,
    },
    PackProduct {
        code: "SWSH45",
        name: "Shining Fates",
        cost: 120,
    },
];

pub fn product_for(code: &str) -> Option<&'static PackProduct> {
    PACK_PRODUCTS.iter().find(|product| product.code == code)
}
