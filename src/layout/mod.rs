use std::path::{Path, PathBuf};

/// Install location of the Salco's Arsenal mod the binary edits.
pub const DEFAULT_MOD_ROOT: &str = r"E:\STP4.0.10\SPT\user\mods\SalcosArsenal";

/// Directory layout of the mod, rooted at one path.
///
/// Every operation takes the layout instead of reading a global, so the same
/// code runs against a scratch copy of the tree.
#[derive(Debug, Clone)]
pub struct ModLayout {
    root: PathBuf,
}

impl ModLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `db/CustomAmmo`
    pub fn ammo_dir(&self) -> PathBuf {
        self.root.join("db").join("CustomAmmo")
    }

    /// `db/CustomArmor/Body_armor_build_ins`
    pub fn armor_dir(&self) -> PathBuf {
        self.root
            .join("db")
            .join("CustomArmor")
            .join("Body_armor_build_ins")
    }

    /// `Level_<tier>` under the body armor directory.
    pub fn armor_tier_dir(&self, tier: u8) -> PathBuf {
        self.armor_dir().join(format!("Level_{tier}"))
    }
}

impl Default for ModLayout {
    fn default() -> Self {
        Self::new(DEFAULT_MOD_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = ModLayout::new("/mods/SalcosArsenal");
        assert_eq!(layout.root(), Path::new("/mods/SalcosArsenal"));
        assert_eq!(
            layout.ammo_dir(),
            PathBuf::from("/mods/SalcosArsenal/db/CustomAmmo")
        );
        assert_eq!(
            layout.armor_tier_dir(6),
            PathBuf::from("/mods/SalcosArsenal/db/CustomArmor/Body_armor_build_ins/Level_6")
        );
        assert_eq!(
            layout.armor_tier_dir(7),
            PathBuf::from("/mods/SalcosArsenal/db/CustomArmor/Body_armor_build_ins/Level_7")
        );
    }

    #[test]
    fn test_default_layout_uses_mod_root() {
        assert_eq!(ModLayout::default().root(), Path::new(DEFAULT_MOD_ROOT));
    }
}
