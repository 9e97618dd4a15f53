use std::collections::HashSet;
use std::fs;

use serde_json::{Map, Value};

use super::DURABILITY_FIELDS;
use crate::helpers::{derive_tier_id, replace_in_sequence};
use crate::items::{Fields, ItemError, ItemFile, list_json_files};
use crate::layout::ModLayout;

/// Durability multiplier applied on top of the boosted tier-6 value.
pub const TIER7_DURABILITY_BOOST: f64 = 1.5;
/// Blunt throughput multiplier; lower means better protection.
pub const TIER7_BLUNT_FACTOR: f64 = 0.7;
/// Flea market and handbook price multiplier.
pub const TIER7_PRICE_BOOST: f64 = 1.5;

const PRICE_FIELDS: [&str; 2] = ["fleaPriceRoubles", "handbookPriceRoubles"];
const NAME_SUBSTITUTIONS: [(&str, &str); 2] = [("Lv.6", "Lv.7"), ("Lv6", "Lv7")];
const FILE_NAME_SUBSTITUTIONS: [(&str, &str); 2] = [("Lv6", "Lv7"), ("_6", "_7")];

/// Build a tier-7 copy of every `Level_6` file into `Level_7`.
///
/// Reads the tier-6 files as they are on disk, so run it after
/// [`boost_tier6`](super::boost_tier6). `Level_7` is created when absent and
/// same-named files in it are overwritten. Returns the number of files
/// written.
pub fn generate_tier7(layout: &ModLayout) -> Result<usize, ItemError> {
    println!("=== Creating Level 7 Armor ===");
    let source_dir = layout.armor_tier_dir(6);
    let target_dir = layout.armor_tier_dir(7);

    if !target_dir.is_dir() {
        fs::create_dir(&target_dir).map_err(|source| ItemError::Io {
            path: target_dir.clone(),
            source,
        })?;
    }

    let files = list_json_files(&source_dir)?;
    let mut derived_ids = HashSet::new();

    for path in &files {
        let source_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ItemError::NonUtf8Name { path: path.clone() })?;
        println!("Creating Level 7 from: {source_name}");
        let source = ItemFile::load(path)?;

        let mut items = Map::new();
        for (id, definition) in source.items() {
            let new_id = derive_tier_id(id, '7');
            if new_id == *id || !derived_ids.insert(new_id.clone()) {
                return Err(ItemError::IdentifierCollision {
                    id: new_id,
                    source_id: id.clone(),
                });
            }

            let mut definition = definition.clone();
            promote_to_tier7(&new_id, &mut definition)?;
            items.insert(new_id.clone(), definition);
            println!("  Created: {new_id} (armorClass 7)");
        }

        let output = ItemFile::new(target_dir.join(tier7_file_name(source_name)), items);
        output.save()?;
        println!("  Saved: {}", output.file_name());
    }

    println!("✓ Created {} Level 7 armor files\n", files.len());
    Ok(files.len())
}

/// Rewrite a copied tier-6 definition into its tier-7 form.
///
/// `armorClass` becomes the string `"7"`, durability and prices are raised and
/// truncated, blunt throughput drops and stays fractional, and display text is
/// renamed. A definition without `overrideProperties` gets no `armorClass`.
pub fn promote_to_tier7(id: &str, definition: &mut Value) -> Result<(), ItemError> {
    let mut record = Fields::record(id, definition)?;

    if let Some(mut props) = record.object("overrideProperties")? {
        props.set("armorClass", "7");
        for field in DURABILITY_FIELDS {
            props.scale_truncated(field, TIER7_DURABILITY_BOOST)?;
        }
        props.scale_float("BluntThroughput", TIER7_BLUNT_FACTOR)?;
    }

    if let Some(mut locales) = record.object("locales")? {
        for locale in locales.entries() {
            let mut locale = locale?;
            locale.rewrite_text("name", |name| replace_in_sequence(name, &NAME_SUBSTITUTIONS))?;
            // Every '6' goes, digits of calibers and model numbers included.
            locale.rewrite_text("shortName", |short| short.replace('6', "7"))?;
        }
    }

    for field in PRICE_FIELDS {
        record.scale_truncated(field, TIER7_PRICE_BOOST)?;
    }

    Ok(())
}

/// Tier-7 file name for a tier-6 file name.
pub fn tier7_file_name(name: &str) -> String {
    replace_in_sequence(name, &FILE_NAME_SUBSTITUTIONS)
}
