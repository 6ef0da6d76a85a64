use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "supply-demand",
    about = "Supply/demand: demonstrations of scoped recursive resolution",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Root demands `third` (added for its subtree), which demands `first`
    Demo {
        #[command(flatten)]
        run: RunArgs,
    },

    /// `first` demands `second` and joins the results as `1&2`
    Chain {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Root demands a type no supplier is registered for
    Missing {
        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<String>,

    /// Simulated latency of leaf suppliers, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Log filter directive (e.g. `debug`, `supply_demand_kernel=debug`)
    #[arg(long)]
    pub log: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
