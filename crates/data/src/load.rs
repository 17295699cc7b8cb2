//! Parser for the `<SET>_data.txt` card dumps: lines of C#-style field
//! declarations, of which the `_name` and `_rarity` string arrays become the
//! set's catalog columns.

use anyhow::{bail, Context};
use packrip_core::{Catalog, SetCatalog, ENERGY_SET_CODE};
use std::fs;
use std::path::Path;

const DATA_FILE_SUFFIX: &str = "_data.txt";

/// Ids the energy slot draws from; the energy set must cover both ranges.
const ENERGY_ID_RANGE: std::ops::RangeInclusive<usize> = 1..=16;

/// Load every `*_data.txt` file in `dir` into a catalog keyed by upper-cased
/// set code. Lines that are not string-field declarations are skipped.
pub fn load_catalog(dir: &Path) -> anyhow::Result<Catalog> {
    let mut catalog = Catalog::new();
    let entries = fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("read {}", dir.display()))?;
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some(stem) = file_name.strip_suffix(DATA_FILE_SUFFIX) else {
            continue;
        };
        let raw =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        catalog.insert(stem.to_ascii_uppercase(), parse_set_data(&raw));
    }
    Ok(catalog)
}

/// Load-time invariants the engine itself does not re-check: aligned catalog
/// columns, and an energy set wide enough for the fixed energy-slot ranges.
pub fn validate_catalog(catalog: &Catalog) -> anyhow::Result<()> {
    for (code, set) in catalog {
        if set.names.len() != set.rarities.len() {
            bail!(
                "set {code}: {} names but {} rarities",
                set.names.len(),
                set.rarities.len()
            );
        }
    }
    if let Some(energy) = catalog.get(ENERGY_SET_CODE) {
        for id in ENERGY_ID_RANGE {
            if !energy.entry_is_valid(id) {
                bail!(
                    "energy set {ENERGY_SET_CODE} has no valid card at id {id}; \
                     ids {}..={} must all be drawable",
                    ENERGY_ID_RANGE.start(),
                    ENERGY_ID_RANGE.end()
                );
            }
        }
    }
    Ok(())
}

fn parse_set_data(raw: &str) -> SetCatalog {
    let mut names = Vec::new();
    let mut rarities = Vec::new();
    for line in raw.lines() {
        let line = line.trim();
        let Some((decl, value)) = line.split_once('=') else {
            continue;
        };
        let Some(field) = parse_field_decl(decl.trim()) else {
            continue;
        };
        if !field.array {
            continue;
        }
        match field.name {
            "_name" => names = parse_array(value.trim()),
            "_rarity" => rarities = parse_array(value.trim()),
            _ => {}
        }
    }
    SetCatalog::new(names, rarities)
}

struct FieldDecl<'a> {
    name: &'a str,
    array: bool,
}

/// Accepts `private string <ident>` and `private string[] <ident>`.
fn parse_field_decl(decl: &str) -> Option<FieldDecl<'_>> {
    let rest = decl.strip_prefix("private")?.trim_start();
    let (array, rest) = match rest.strip_prefix("string[]") {
        Some(rest) => (true, rest),
        None => (false, rest.strip_prefix("string")?),
    };
    let name = rest.trim();
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return None;
    }
    Some(FieldDecl { name, array })
}

/// `{"a", "b", "c"};` into its unquoted elements.
fn parse_array(value: &str) -> Vec<String> {
    let trimmed = value.trim().trim_end_matches(';').trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|v| v.strip_suffix('}'))
        .unwrap_or(trimmed);
    inner
        .split(',')
        .map(|item| item.trim().trim_matches('"').to_string())
        .collect()
}
