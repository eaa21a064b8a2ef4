use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

#[derive(Parser)]
#[command(name = "fix64", version, about = "Deterministic Q40.24 fixed-point calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the determinism vector and check it against the reference.
    Vector {
        #[arg(long)]
        json: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Evaluate `<lhs> <op> <rhs>`.
    Eval {
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        #[arg(value_enum)]
        op: cli::eval::OpArg,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
        #[arg(long, value_enum, default_value_t = cli::eval::PolicyArg::Wrap)]
        policy: cli::eval::PolicyArg,
        /// Read operands as raw i64 values instead of decimal literals.
        #[arg(long)]
        raw: bool,
    },
    /// Show how a decimal literal is stored.
    Convert {
        #[arg(allow_hyphen_values = true)]
        literal: String,
    },
    /// Describe a raw i64 value.
    Raw {
        #[arg(allow_hyphen_values = true)]
        value: i64,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fix64=info"));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Vector { json, out } => {
            let args = cli::vector::VectorArgs { json, out };
            cli::vector::run(args)
        }
        Commands::Eval {
            lhs,
            op,
            rhs,
            policy,
            raw,
        } => {
            let args = cli::eval::EvalArgs {
                lhs,
                op,
                rhs,
                policy,
                raw,
            };
            cli::eval::run(&args)
        }
        Commands::Convert { literal } => cli::convert::run(&literal),
        Commands::Raw { value } => cli::convert::run_raw(value),
    };
    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
