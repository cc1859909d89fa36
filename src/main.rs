use bstvalid::{scenarios, Duplicates, Strategy, Validator};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Runs the built-in example trees through a BST validator and reports any verdict that
/// disagrees with the expected one.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Traversal to validate with.
    #[arg(long, value_enum, default_value_t = StrategyArg::Recursive, env = "BSTVALID_STRATEGY")]
    strategy: StrategyArg,

    /// Run every traversal instead of just `--strategy`.
    #[arg(long)]
    all: bool,

    /// Where values equal to an ancestor may appear.
    #[arg(long, value_enum, default_value_t = DuplicatesArg::Reject, env = "BSTVALID_DUPLICATES")]
    duplicates: DuplicatesArg,

    /// Turn debugging information on (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Recursive,
    Checked,
    Iterative,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Recursive => Strategy::Recursive,
            StrategyArg::Checked => Strategy::Checked,
            StrategyArg::Iterative => Strategy::Iterative,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DuplicatesArg {
    Reject,
    Left,
    Right,
}

impl From<DuplicatesArg> for Duplicates {
    fn from(arg: DuplicatesArg) -> Self {
        match arg {
            DuplicatesArg::Reject => Duplicates::Reject,
            DuplicatesArg::Left => Duplicates::Left,
            DuplicatesArg::Right => Duplicates::Right,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let validator = Validator::new().duplicates(cli.duplicates.into());
    let strategies = if cli.all {
        Strategy::ALL.to_vec()
    } else {
        vec![cli.strategy.into()]
    };

    let failed = run(&validator, &strategies);
    if failed > 0 {
        eprintln!("{}", format!("*** {} CHECK(S) FAILED", failed).red());
        std::process::exit(1);
    }
    println!("{}", "*** ALL CHECKS PASSED".green());
}

/// Checks every scenario with every strategy, printing one line per check. Returns how many
/// verdicts disagreed with the expected one.
fn run(validator: &Validator, strategies: &[Strategy]) -> usize {
    let mut failed = 0;

    for strategy in strategies {
        for scenario in scenarios::all() {
            let verdict = validator.check(*strategy, scenario.root.as_ref());
            let status = if verdict == scenario.expected {
                "PASS".green()
            } else {
                failed += 1;
                "FAIL".red()
            };
            tracing::info!(%strategy, scenario = scenario.name, verdict, "checked");
            println!(
                "{} [{}] {}: expected {}, got {}",
                status, strategy, scenario.name, scenario.expected, verdict
            );
        }
    }

    failed
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
