mod tier6;
mod tier7;

pub use tier6::{TIER6_DURABILITY_BOOST, boost_tier6};
pub use tier7::generate_tier7;

/// Durability fields under `overrideProperties`.
const DURABILITY_FIELDS: [&str; 2] = ["Durability", "MaxDurability"];
