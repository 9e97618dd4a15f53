mod ammo;
mod armor;
mod helpers;
mod items;
mod layout;

use anyhow::{Context, Result};

use ammo::AMMO_BOOST;
use armor::TIER6_DURABILITY_BOOST;
use layout::ModLayout;

/// Boost percentage shown for a multiplier, e.g. 1.4 -> 40.
fn boost_percent(factor: f64) -> i64 {
    ((factor - 1.0) * 100.0).round() as i64
}

fn print_summary() {
    println!("{}", "=".repeat(50));
    println!("✓ ALL MODIFICATIONS COMPLETE!");
    println!();
    println!("Changes made:");
    println!("  • All ammunition boosted by {}%", boost_percent(AMMO_BOOST));
    println!(
        "  • Level 6 armor durability boosted by {}%",
        boost_percent(TIER6_DURABILITY_BOOST)
    );
    println!("  • Level 7 armor created from Level 6");
}

/// Ammo, then tier-6 armor, then tier-7 generation. The first error stops the
/// run; files already written stay written.
fn run(layout: &ModLayout) -> Result<()> {
    let root = layout.root().display();

    ammo::boost_ammo(layout).with_context(|| format!("boost ammunition under {root}"))?;
    armor::boost_tier6(layout).with_context(|| format!("boost Level 6 armor under {root}"))?;
    armor::generate_tier7(layout).with_context(|| format!("create Level 7 armor under {root}"))?;

    Ok(())
}

fn main() -> Result<()> {
    let layout = ModLayout::default();

    println!("SalcoArsenal Mod Enhancement Script");
    println!("{}", "=".repeat(50));
    println!();

    run(&layout)?;
    print_summary();

    Ok(())
}
