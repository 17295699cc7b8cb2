use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Set code of the shared energy set every main-set booster draws its first
/// card from.
pub const ENERGY_SET_CODE: &str = "SVE";

/// Catalog entries carrying this name are placeholders and never drawable.
pub const PLACEHOLDER_NAME: &str = "null";

/// All loaded sets, keyed by set code ("SV1", "SWSH35", ...). The engine only
/// ever reads it.
pub type Catalog = HashMap<String, SetCatalog>;

/// One set's card list as two aligned columns indexed by card id. Id 0 is
/// reserved and never drawable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetCatalog {
    pub names: Vec<String>,
    pub rarities: Vec<String>,
}

impl SetCatalog {
    pub fn new(names: Vec<String>, rarities: Vec<String>) -> Self {
        Self { names, rarities }
    }

    /// A set is usable for pack generation once both columns are populated.
    pub fn is_usable(&self) -> bool {
        !self.names.is_empty() && !self.rarities.is_empty()
    }

    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn rarity(&self, id: usize) -> Option<&str> {
        self.rarities.get(id).map(String::as_str)
    }

    /// Drawable card ids, skipping the reserved index 0.
    pub fn card_ids(&self) -> impl Iterator<Item = usize> {
        1..self.names.len()
    }

    /// An entry is drawable when its name is present, non-empty and not the
    /// placeholder marker.
    pub fn entry_is_valid(&self, id: usize) -> bool {
        if id == 0 {
            return false;
        }
        self.names
            .get(id)
            .is_some_and(|name| !name.is_empty() && name != PLACEHOLDER_NAME)
    }
}

/// A single card pulled from a pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// `"<setCode>:<cardId>"`.
    pub id: String,
    pub name: String,
    pub rarity: String,
}
