use serde::{Deserialize, Serialize};

/// Numeric set ids with bespoke rare-slot odds.
pub const CHAMPIONS_PATH_SET_ID: u32 = 21;
pub const SHINING_FATES_SET_ID: u32 = 23;

/// Grouping of sets that share one rarity-table configuration. Derived from
/// the numeric set id supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetFamily {
    ScarletVioletPromo,
    SwordShieldPromo,
    ScarletViolet,
    SwordShield,
    Unknown,
}

impl SetFamily {
    pub fn from_set_id(set_id: u32) -> Self {
        match set_id {
            1 => Self::ScarletVioletPromo,
            17 => Self::SwordShieldPromo,
            2..=15 => Self::ScarletViolet,
            18..=32 => Self::SwordShield,
            _ => Self::Unknown,
        }
    }

    pub fn is_promo(self) -> bool {
        matches!(self, Self::ScarletVioletPromo | Self::SwordShieldPromo)
    }

    /// Fixed number of cards in a booster of this family.
    pub fn pack_size(self) -> usize {
        if self.is_promo() {
            5
        } else {
            11
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::ScarletVioletPromo => "Scarlet & Violet Promo",
            Self::SwordShieldPromo => "Sword & Shield Promo",
            Self::ScarletViolet => "Scarlet & Violet",
            Self::SwordShield => "Sword & Shield",
            Self::Unknown => "Unknown",
        }
    }
}
