use std::path::PathBuf;

use clap::Parser;

use qmc_rs::cover::{search_space_for, CostMetric, SearchConfig};
use qmc_rs::minimize::Minimizer;
use qmc_rs::term::Terms;
use qmc_rs::truth_table::TruthTable;

/// Six-variable function used when no truth table is given.
const DEFAULT_TABLE: &str = "\
    1011101100 1100111111 1111100010 1010001000 \
    0010001010 0010001110 1010";

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Truth table as 0/1 digits (whitespace, ',' and '_' are ignored).
    #[arg(value_name = "TABLE", default_value = DEFAULT_TABLE)]
    table: String,

    /// Where to write the coverage table dump.
    #[clap(long, value_name = "PATH", default_value = "table.txt")]
    dump: PathBuf,

    /// Rank covers by number of literals instead of number of terms.
    #[clap(long)]
    literal_cost: bool,

    /// Also try the essential implicants on their own.
    #[clap(long)]
    essential_only: bool,

    /// Enable debug logging.
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

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

    let time_total = std::time::Instant::now();

    let tt: TruthTable = match args.table.parse() {
        Ok(tt) => tt,
        Err(e) => {
            eprintln!("Malformed truth table: {}", e);
            std::process::exit(2);
        }
    };
    println!("function of {} variables: {}", tt.num_vars(), tt);

    let config = SearchConfig {
        cost: if args.literal_cost {
            CostMetric::LiteralCount
        } else {
            CostMetric::TermLength
        },
        try_essential_only: args.essential_only,
    };
    let result = Minimizer::new(config).minimize(&tt);

    println!("source SDNF: {}", Terms(&result.minterms));
    println!("prime implicants: {}", Terms(&result.prime_implicants));
    println!("core implicants: {}", Terms(&result.essential));
    println!("table size after essential pass: {}", result.table.num_rows());
    println!("subsets tested: {}", search_space_for(&result.table));

    result.table.write_dump(&args.dump)?;
    println!("coverage table written to {}", args.dump.display());

    println!("total coverage: {:3.4}%", result.coverage_ratio() * 100.0);
    println!("result: {}", result.sop());
    println!("result complexity: {}", result.literal_count());
    println!("implicants in result: {}", result.terms().len());
    println!("result cost: {} ({} candidates)", result.cost(), result.solution.candidates);

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
