//! Reducing sample formulas to restricted operator bases.
//!
//! Each sample formula is reduced to the chosen basis (or to all five), then
//! checked against the input formula with the semantic evaluator.
//!
//! Run with: `cargo run --example reduce`
//! With options: `cargo run --example reduce -- --basis nand --fresh -v`

use clap::{Parser, ValueEnum};
use color_eyre::eyre::ensure;

use prop_reduce::basis::Basis;
use prop_reduce::formula::Formula;
use prop_reduce::reduce::Reducer;
use prop_reduce::semantics::{all_models, is_equivalent, truth_values};

#[derive(ValueEnum, Debug, Copy, Clone)]
enum Target {
    NotAndOr,
    NotAnd,
    Nand,
    ImpliesNot,
    ImpliesFalse,
}

impl From<Target> for Basis {
    fn from(target: Target) -> Self {
        match target {
            Target::NotAndOr => Basis::NotAndOr,
            Target::NotAnd => Basis::NotAnd,
            Target::Nand => Basis::Nand,
            Target::ImpliesNot => Basis::ImpliesNot,
            Target::ImpliesFalse => Basis::ImpliesFalse,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "reduce")]
#[command(about = "Rewrite propositional formulas into restricted operator bases")]
struct Args {
    /// Target basis (all five if omitted)
    #[arg(short, long, value_enum)]
    basis: Option<Target>,

    /// Pick a padding variable that does not occur in the formula
    #[arg(long)]
    fresh: bool,

    /// Print truth tables
    #[arg(short, long)]
    table: bool,

    /// Log every reduction step
    #[arg(short, long)]
    verbose: bool,
}

fn samples() -> Vec<Formula> {
    let p = || Formula::var("p");
    let q = || Formula::var("q");
    let r = || Formula::var("r");
    vec![
        Formula::implies(p(), q()),
        Formula::truth(),
        Formula::and(p(), q()),
        Formula::or(p(), q()),
        Formula::iff(p(), q()),
        Formula::xor(Formula::nand(p(), r()), Formula::nor(q(), Formula::falsity())),
    ]
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let bases: Vec<Basis> = match args.basis {
        Some(target) => vec![target.into()],
        None => Basis::ALL.to_vec(),
    };

    for f in samples() {
        let reducer = if args.fresh {
            Reducer::fresh_for(&f)
        } else {
            Reducer::default()
        };
        println!("f = {}", f);

        for &basis in &bases {
            let g = basis.reduce(&reducer, &f);
            println!("  {:<8} {} (size {}, depth {})", basis, g, g.size(), g.depth());
            ensure!(basis.admits(&g), "{} is not in {}", g, basis);
            ensure!(is_equivalent(&f, &g), "{} is not equivalent to {}", g, f);

            if args.table {
                let mut variables = f.variables();
                variables.extend(g.variables());
                let variables: Vec<&str> = variables.into_iter().collect();
                let models: Vec<_> = all_models(&variables).collect();
                let before = truth_values(&f, models.iter().cloned())?;
                let after = truth_values(&g, models.iter().cloned())?;
                for ((model, a), b) in models.iter().zip(before).zip(after) {
                    let row: Vec<String> = model
                        .iter()
                        .map(|(name, value)| format!("{}={}", name, if value { 'T' } else { 'F' }))
                        .collect();
                    println!("    {:<16} {} {}", row.join(" "), a, b);
                }
            }
        }
        println!();
    }

    Ok(())
}
