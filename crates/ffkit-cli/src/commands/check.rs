use crate::cli::CheckArgs;
use crate::error::Result;
use ffkit::forcefield::codec::TermRegistry;
use ffkit::io;
use tracing::info;

pub fn run(args: &CheckArgs) -> Result<()> {
    let registry = TermRegistry::new();
    let forcefield = io::load(&args.input, &registry)?;

    println!("Term table: {}", args.input.display());
    println!("  atom types        {:>5}", forcefield.atom_types().len());
    println!(
        "  charge increments {:>5}",
        forcefield.charge_increments().len()
    );
    println!("  vdW terms         {:>5}", forcefield.vdw_terms().len());
    println!("  bond terms        {:>5}", forcefield.bond_terms().len());
    println!("  angle terms       {:>5}", forcefield.angle_terms().len());
    println!(
        "  dihedral terms    {:>5}",
        forcefield.dihedral_terms().len()
    );
    println!(
        "  improper terms    {:>5}",
        forcefield.improper_terms().len()
    );
    println!("  polar terms       {:>5}", forcefield.polar_terms().len());

    forcefield.validate()?;
    info!("cross-term validation passed");
    println!("OK: {} terms, table is consistent", forcefield.len());
    Ok(())
}
