use crate::items::{ItemError, ItemFile, display_name, list_json_files};
use crate::layout::ModLayout;

/// Multiplier applied to every ballistic field.
pub const AMMO_BOOST: f64 = 1.4;

/// Fields under `overrideProperties` that get boosted.
pub const BOOSTED_FIELDS: [&str; 4] = ["Damage", "ArmorDamage", "PenetrationPower", "InitialSpeed"];

/// Boost every ammo item in `db/CustomAmmo` and rewrite each file in place.
///
/// Every file is written back, changed or not. Running this twice compounds
/// the boost. Returns the number of files processed.
pub fn boost_ammo(layout: &ModLayout) -> Result<usize, ItemError> {
    println!("=== Boosting Ammunition ===");
    let files = list_json_files(&layout.ammo_dir())?;

    for path in &files {
        println!("Processing: {}", display_name(path));
        let mut file = ItemFile::load(path)?;

        for record in file.records_mut() {
            let mut record = record?;
            let Some(mut props) = record.object("overrideProperties")? else {
                continue;
            };
            for field in BOOSTED_FIELDS {
                if let Some(change) = props.scale_truncated(field, AMMO_BOOST)? {
                    println!("  {field}: {change}");
                }
            }
        }

        file.save()?;
    }

    println!("✓ Boosted {} ammo files\n", files.len());
    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::fs;
    use std::path::Path;

    fn write_json(path: &Path, value: &Value) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_boost_ammo_scales_all_fields() {
        let temp_dir = tempfile::tempdir().unwrap();
        let layout = ModLayout::new(temp_dir.path());
        let path = layout.ammo_dir().join("556.json");
        write_json(
            &path,
            &json!({
                "ammo556": {
                    "overrideProperties": {
                        "Damage": 45,
                        "ArmorDamage": 50,
                        "PenetrationPower": 35,
                        "InitialSpeed": 900,
                        "Caliber": "Caliber556x45NATO"
                    },
                    "fleaPriceRoubles": 300
                }
            }),
        );

        assert_eq!(boost_ammo(&layout).unwrap(), 1);

        let data = read_json(&path);
        let props = &data["ammo556"]["overrideProperties"];
        assert_eq!(props["Damage"], json!(62));
        assert_eq!(props["ArmorDamage"], json!(70));
        assert_eq!(props["PenetrationPower"], json!(49));
        assert_eq!(props["InitialSpeed"], json!(1260));
        assert_eq!(props["Caliber"], json!("Caliber556x45NATO"));
        assert_eq!(data["ammo556"]["fleaPriceRoubles"], json!(300));
    }

    #[test]
    fn test_boost_ammo_compounds_on_rerun() {
        let temp_dir = tempfile::tempdir().unwrap();
        let layout = ModLayout::new(temp_dir.path());
        let path = layout.ammo_dir().join("ammo.json");
        write_json(&path, &json!({ "a": { "overrideProperties": { "Damage": 100 } } }));

        boost_ammo(&layout).unwrap();
        boost_ammo(&layout).unwrap();

        // floor(floor(100 * 1.4) * 1.4)
        assert_eq!(read_json(&path)["a"]["overrideProperties"]["Damage"], json!(196));
    }

    #[test]
    fn test_boost_ammo_leaves_absent_fields_alone() {
        let temp_dir = tempfile::tempdir().unwrap();
        let layout = ModLayout::new(temp_dir.path());
        let path = layout.ammo_dir().join("ammo.json");
        write_json(
            &path,
            &json!({
                "bare": { "name": "no properties" },
                "partial": { "overrideProperties": { "Damage": 10 } }
            }),
        );

        boost_ammo(&layout).unwrap();

        let data = read_json(&path);
        assert_eq!(data["bare"], json!({ "name": "no properties" }));
        assert_eq!(data["partial"], json!({ "overrideProperties": { "Damage": 14 } }));
    }

    #[test]
    fn test_boost_ammo_rejects_non_numeric_damage() {
        let temp_dir = tempfile::tempdir().unwrap();
        let layout = ModLayout::new(temp_dir.path());
        let path = layout.ammo_dir().join("ammo.json");
        write_json(&path, &json!({ "a": { "overrideProperties": { "Damage": "high" } } }));

        let err = boost_ammo(&layout).unwrap_err();
        assert!(matches!(err, ItemError::TypeMismatch { .. }));
        // Nothing was written for the failing file.
        assert_eq!(
            read_json(&path)["a"]["overrideProperties"]["Damage"],
            json!("high")
        );
    }

    #[test]
    fn test_boost_ammo_stops_at_invalid_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let layout = ModLayout::new(temp_dir.path());
        let good = layout.ammo_dir().join("a.json");
        write_json(&good, &json!({ "a": { "overrideProperties": { "Damage": 10 } } }));
        fs::write(layout.ammo_dir().join("b.json"), "not json").unwrap();

        let err = boost_ammo(&layout).unwrap_err();
        assert!(matches!(err, ItemError::Json { .. }));
        // Earlier files keep their mutation.
        assert_eq!(read_json(&good)["a"]["overrideProperties"]["Damage"], json!(14));
    }

    #[test]
    fn test_boost_ammo_without_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let layout = ModLayout::new(temp_dir.path());
        assert_eq!(boost_ammo(&layout).unwrap(), 0);
    }
}
