//! Firing Graph Binary
//!
//! Builds the K3 firing graph for a chip total and prints it.

use chipfire::*;
use clap::Parser;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short = 'n', long, default_value_t = 2, help = "Total number of chips on K3")]
    chips: Chips,
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
    #[arg(long, help = "Print only the out-edges of this configuration, e.g. 2,0,0")]
    node: Option<String>,
    #[arg(short, long, help = "Log debug output to stderr")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    });
    anyhow::ensure!(args.chips >= 0, "chip total must be non-negative, got {}", args.chips);
    log::info!("building firing graph with {} chips", args.chips);
    let graph = FiringGraph::build(args.chips);
    match (args.node, args.format) {
        (None, Format::Text) => print!("{}", graph),
        (None, Format::Json) => println!("{}", serde_json::to_string_pretty(&graph)?),
        (Some(node), format) => {
            let node = Configuration::try_from(node.as_str())?;
            let edges = graph.get(&node).ok_or_else(|| {
                anyhow::anyhow!("{} is not a configuration of {} chips", node, args.chips)
            })?;
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(edges)?),
                Format::Text => {
                    for (vertex, next) in edges {
                        println!("{} ─{}→ {}", node, vertex, next);
                    }
                }
            }
        }
    }
    Ok(())
}
