use super::DURABILITY_FIELDS;
use crate::items::{ItemError, ItemFile, display_name, list_json_files};
use crate::layout::ModLayout;

/// Durability multiplier for tier-6 armor.
pub const TIER6_DURABILITY_BOOST: f64 = 1.8;

/// Boost durability of every item in `Level_6`, rewriting each file in place.
///
/// Returns `None` without touching the filesystem when `Level_6` is missing,
/// otherwise the number of files processed.
pub fn boost_tier6(layout: &ModLayout) -> Result<Option<usize>, ItemError> {
    println!("=== Boosting Level 6 Armor ===");
    let dir = layout.armor_tier_dir(6);

    if !dir.exists() {
        println!("! Level_6 folder not found");
        return Ok(None);
    }

    let files = list_json_files(&dir)?;
    for path in &files {
        println!("Processing: {}", display_name(path));
        let mut file = ItemFile::load(path)?;

        for record in file.records_mut() {
            let mut record = record?;
            let Some(mut props) = record.object("overrideProperties")? else {
                continue;
            };
            for field in DURABILITY_FIELDS {
                if let Some(change) = props.scale_truncated(field, TIER6_DURABILITY_BOOST)? {
                    println!("  {field}: {change}");
                }
            }
        }

        file.save()?;
    }

    println!("✓ Boosted {} Level 6 armor files\n", files.len());
    Ok(Some(files.len()))
}
