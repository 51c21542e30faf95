use crate::cli::DumpArgs;
use crate::error::{CliError, Result};
use ffkit::forcefield::codec::TermRegistry;
use ffkit::io;

pub fn run(args: &DumpArgs) -> Result<()> {
    let registry = TermRegistry::new();
    let forcefield = io::load(&args.input, &registry)?;

    if let Some(name) = &args.eval {
        let term = forcefield
            .find(name)
            .ok_or_else(|| CliError::Argument(format!("no term named '{name}' in the table")))?;
        let at = args
            .at
            .ok_or_else(|| CliError::Argument("--at is required with --eval".to_string()))?;
        let energy = term.evaluate_energy(at)?;
        println!("{} {} U({}) = {}", term.class_name(), term.name(), at, energy);
        return Ok(());
    }

    for term in forcefield.iter_terms() {
        println!("{:<22} {}", term.class_name(), term.name());
    }
    Ok(())
}
