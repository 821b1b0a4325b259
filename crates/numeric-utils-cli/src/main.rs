use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::io::{self, Write};
use std::path::PathBuf;

use numeric_utils::config::DiceConfig;
use numeric_utils::probability::EventProbabilities;
use numeric_utils_cli::linalg::{
    run_matrices, run_vectors, DEFAULT_MATRIX_A, DEFAULT_MATRIX_B, DEFAULT_VECTOR_A,
    DEFAULT_VECTOR_B,
};
use numeric_utils_cli::probability::bayes::{run_bayes, PartialCounts, DEFAULT_KEYWORD};
use numeric_utils_cli::probability::conditional::{parse_events, run_conditional};
use numeric_utils_cli::probability::dice::{load_dice_config, run_dice};

fn operand(name: &'static str, help: &'static str, default: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .default_value(default)
        .allow_hyphen_values(true)
        .value_hint(ValueHint::Other)
}

fn count(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_parser(clap::value_parser!(u64))
        .value_hint(ValueHint::Other)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("NUMUTIL_LOG", "error,numutil=info"))
        .init();

    let matches = Command::new("numutil")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Introductory linear algebra and probability demos")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("vectors")
                .about("Add two vectors, take their dot product and test orthogonality")
                .arg(operand("a", "First vector, comma separated", DEFAULT_VECTOR_A))
                .arg(operand("b", "Second vector, comma separated", DEFAULT_VECTOR_B)),
        )
        .subcommand(
            Command::new("matrices")
                .about("Multiply two matrices")
                .arg(operand(
                    "a",
                    "Left matrix: rows separated by ';', entries by ','",
                    DEFAULT_MATRIX_A,
                ))
                .arg(operand(
                    "b",
                    "Right matrix: rows separated by ';', entries by ','",
                    DEFAULT_MATRIX_B,
                )),
        )
        .subcommand(
            Command::new("dice")
                .about("Estimate two-dice sum probabilities by simulation")
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON dice configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("trials")
                        .short('n')
                        .long("trials")
                        .help("Number of simulated rolls. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("seed")
                        .short('s')
                        .long("seed")
                        .help("Seed for reproducible runs. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("decimals")
                        .long("decimals")
                        .help("Decimal places to print. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("confidence")
                        .long("confidence")
                        .help("Confidence level for --show-interval. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("show_interval")
                        .long("show-interval")
                        .help("Print confidence intervals and exact probabilities.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("bayes")
                .about("P(spam | keyword) from email counts via Bayes' theorem")
                .arg(
                    Arg::new("keyword")
                        .short('k')
                        .long("keyword")
                        .help("Keyword named in the prompts")
                        .default_value(DEFAULT_KEYWORD),
                )
                .arg(count("total", "Total number of emails"))
                .arg(count("with-keyword", "Number of emails containing the keyword"))
                .arg(count("spam", "Number of spam emails"))
                .arg(count(
                    "spam-and-keyword",
                    "Number of spam emails containing the keyword",
                )),
        )
        .subcommand(
            Command::new("conditional")
                .about("P(A | B) = P(A and B) / P(B)")
                .arg(
                    Arg::new("events")
                        .short('e')
                        .long("events")
                        .help("JSON mapping with keys A_and_B and B")
                        .conflicts_with_all(["a_and_b", "b"]),
                )
                .arg(
                    Arg::new("a_and_b")
                        .long("a-and-b")
                        .help("P(A and B)")
                        .default_value("0.12")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("b")
                        .long("b")
                        .help("P(B)")
                        .default_value("0.4")
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    let (name, result) = match matches.subcommand() {
        Some(("vectors", sub_m)) => ("Vector demo", handle_vectors(sub_m)),
        Some(("matrices", sub_m)) => ("Matrix demo", handle_matrices(sub_m)),
        Some(("dice", sub_m)) => ("Dice simulation", handle_dice(sub_m)),
        Some(("bayes", sub_m)) => ("Bayes calculation", handle_bayes(sub_m)),
        Some(("conditional", sub_m)) => ("Conditional probability", handle_conditional(sub_m)),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("{} failed: {:#}", name, e);
            std::process::exit(1)
        }
    }
}

fn operands(matches: &ArgMatches) -> (&str, &str) {
    let a = matches.get_one::<String>("a").map(String::as_str).unwrap_or_default();
    let b = matches.get_one::<String>("b").map(String::as_str).unwrap_or_default();
    (a, b)
}

fn handle_vectors(matches: &ArgMatches) -> Result<()> {
    let (a, b) = operands(matches);
    run_vectors(a, b, &mut io::stdout().lock())
}

fn handle_matrices(matches: &ArgMatches) -> Result<()> {
    let (a, b) = operands(matches);
    run_matrices(a, b, &mut io::stdout().lock())
}

fn handle_dice(matches: &ArgMatches) -> Result<()> {
    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("[numutil::dice] Using config: {:?}", config_path);
        load_dice_config(config_path)?
    } else {
        let config = DiceConfig::default();
        log::debug!(
            "[numutil::dice] No config provided; using defaults:\n{}",
            serde_json::to_string_pretty(&config).unwrap_or_default()
        );
        config
    };

    if let Some(&trials) = matches.get_one::<usize>("trials") {
        config.trials = trials;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    if let Some(&decimals) = matches.get_one::<usize>("decimals") {
        config.decimals = decimals;
    }
    if let Some(&confidence) = matches.get_one::<f64>("confidence") {
        config.confidence = confidence;
    }

    log::info!(
        "[numutil::dice] Rolling two dice {} times (seed: {:?})",
        config.trials,
        config.seed
    );
    let mut out = io::stdout().lock();
    run_dice(&config, matches.get_flag("show_interval"), &mut out)?;
    out.flush()?;
    Ok(())
}

fn handle_bayes(matches: &ArgMatches) -> Result<()> {
    let keyword = matches
        .get_one::<String>("keyword")
        .map(String::as_str)
        .unwrap_or(DEFAULT_KEYWORD);
    let given = PartialCounts {
        total: matches.get_one::<u64>("total").copied(),
        with_keyword: matches.get_one::<u64>("with-keyword").copied(),
        spam: matches.get_one::<u64>("spam").copied(),
        spam_and_keyword: matches.get_one::<u64>("spam-and-keyword").copied(),
    };

    let stdin = io::stdin();
    run_bayes(given, keyword, stdin.lock(), &mut io::stdout().lock())?;
    Ok(())
}

fn handle_conditional(matches: &ArgMatches) -> Result<()> {
    let events = match matches.get_one::<String>("events") {
        Some(json) => parse_events(json)?,
        None => EventProbabilities::new(
            matches.get_one::<f64>("a_and_b").copied().unwrap_or_default(),
            matches.get_one::<f64>("b").copied().unwrap_or_default(),
        ),
    };
    run_conditional(&events, &mut io::stdout().lock())?;
    Ok(())
}
