use crate::{Catalog, RngState};

/// Ids of every drawable card in the set carrying exactly this rarity. An
/// empty result means "no match", not an error. Pure function of its inputs.
pub fn find_candidates(catalog: &Catalog, set_code: &str, rarity: &str) -> Vec<usize> {
    let Some(set) = catalog.get(set_code) else {
        return Vec::new();
    };
    set.card_ids()
        .filter(|&id| set.rarity(id) == Some(rarity) && set.entry_is_valid(id))
        .collect()
}

/// Uniform sample over `find_candidates`; `None` when the pool is empty.
pub fn pick_random(
    catalog: &Catalog,
    set_code: &str,
    rarity: &str,
    rng: &mut RngState,
) -> Option<usize> {
    let candidates = find_candidates(catalog, set_code, rarity);
    if candidates.is_empty() {
        log::debug!("no drawable '{rarity}' cards in set '{set_code}'");
        return None;
    }
    rng.pick(&candidates).copied()
}
