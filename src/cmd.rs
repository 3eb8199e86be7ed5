//! Command line interface

use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use itertools::Itertools;

use crate::io::{read_cube_file, write_cube_file};
use crate::{minimize, Cube};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Command line arguments
#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics about a cube file
    ///
    /// Will print the number of variables and cubes, and how many cubes
    /// there are of each rank.
    #[clap()]
    Show(ShowArgs),

    /// Minimize a boolean function given by its cubes
    ///
    /// Reads a cube file (typically a list of minterms, one 0/1 pattern per
    /// line) and writes the function's prime implicants, with eliminated
    /// variables printed as '-'.
    #[clap(alias = "min")]
    Minimize(MinimizeArgs),

    /// Check that a set of implicants covers a set of minterms
    ///
    /// The command will fail and list the uncovered minterms if any
    /// assignment in the first file is matched by no cube of the second.
    #[clap(alias = "check")]
    Cover(CoverArgs),
}

fn read_or_exit(path: &Path) -> (Vec<Cube>, u32) {
    read_cube_file(path).unwrap_or_else(|e| {
        eprintln!("{}: {}", path.display(), e);
        process::exit(1);
    })
}

/// Command arguments for minimization
#[derive(Args)]
pub struct MinimizeArgs {
    /// Cube file to minimize
    file: PathBuf,

    /// Output file for the prime implicants
    #[arg(short = 'o', long)]
    output: PathBuf,
}

impl MinimizeArgs {
    /// Run the minimize command
    pub fn run(&self) {
        let (cubes, n_bits) = read_or_exit(&self.file);
        let primes = minimize(&cubes, n_bits).unwrap_or_else(|e| {
            eprintln!("{}: {}", self.file.display(), e);
            process::exit(1);
        });
        println!(
            "Minimized {} cubes over {} variables to {} prime implicants",
            cubes.len(),
            n_bits,
            primes.len()
        );
        write_cube_file(&self.output, &primes, n_bits).unwrap_or_else(|e| {
            eprintln!("{}: {}", self.output.display(), e);
            process::exit(1);
        });
    }
}

/// Command arguments for cover checking
#[derive(Args)]
pub struct CoverArgs {
    /// Minterm file to cover (fully-specified patterns only)
    minterms: PathBuf,

    /// Implicant file that should cover it
    implicants: PathBuf,
}

impl CoverArgs {
    /// Run the cover command
    pub fn run(&self) {
        let (minterms, n1) = read_or_exit(&self.minterms);
        let (implicants, n2) = read_or_exit(&self.implicants);
        if !minterms.is_empty() && !implicants.is_empty() && n1 != n2 {
            println!("Different widths: {} vs {} variables", n1, n2);
            process::exit(1);
        }
        for m in &minterms {
            if m.mask() != crate::cube::width_mask(n1) {
                println!("Not a minterm: {:width$}", m, width = n1 as usize);
                process::exit(1);
            }
        }
        let uncovered: Vec<&Cube> = minterms
            .iter()
            .filter(|m| !implicants.iter().any(|p| p.covers(m.value())))
            .collect();
        if uncovered.is_empty() {
            println!("All {} minterms covered", minterms.len());
        } else {
            println!("{} uncovered minterms:", uncovered.len());
            for m in uncovered {
                println!("{:width$}", m, width = n1 as usize);
            }
            process::exit(1);
        }
    }
}

/// Command arguments for cube file informations
#[derive(Args)]
pub struct ShowArgs {
    /// Cube file to show
    file: PathBuf,
}

impl ShowArgs {
    /// Run the show command
    pub fn run(&self) {
        let (cubes, n_bits) = read_or_exit(&self.file);
        println!("Cube file stats:");
        println!("  Variables: {}", n_bits);
        println!("  Cubes: {}", cubes.len());
        for (rank, count) in cubes.iter().counts_by(|c| c.rank()).iter().sorted() {
            println!("  Rank {}: {}", rank, count);
        }
    }
}
