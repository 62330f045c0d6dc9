use crate::error::Result;
use atomsim::core::forcefield::species::SpeciesTable;
use atomsim::core::units::BOND_DISTANCE_FACTOR;

pub fn run() -> Result<()> {
    let table = SpeciesTable::with_builtins();

    println!("Built-in species (12-6 Lennard-Jones, Zhen & Davies 1983):");
    println!(
        "{:<8} {:>14} {:>12} {:>12} {:>14}",
        "name", "epsilon (J)", "sigma (A)", "mass (amu)", "bond dist (A)"
    );
    for (_, name, params) in table.iter() {
        println!(
            "{:<8} {:>14.4e} {:>12.4} {:>12.3} {:>14.4}",
            name,
            params.epsilon,
            params.sigma,
            params.mass,
            BOND_DISTANCE_FACTOR * params.sigma
        );
    }
    println!();
    println!("Additional species and per-pair sigma overrides can be supplied");
    println!("in the [species] and [[pair_sigma]] sections of a config file.");

    Ok(())
}
