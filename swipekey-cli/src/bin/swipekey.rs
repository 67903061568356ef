use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use swipekey_cli::run_script;
use swipekey_core::{decompose, unicode};

#[derive(Parser, Debug)]
#[command(author, version, about = "Dubeolsik Hangul composition from the terminal", long_about = None)]
struct Args {
    /// Increase log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Type a key script, e.g. "gksrmf<SP>dkssud"
    Type {
        script: String,

        /// Print the text after every key
        #[arg(long)]
        steps: bool,
    },
    /// Print the jamo of each syllable in TEXT
    Decompose { text: String },
    /// Build a syllable from compatibility jamo
    Compose {
        initial: char,
        medial: char,
        #[arg(value_name = "FINAL")]
        last: Option<char>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Type { script, steps } => {
            let output = run_script(&script, steps).context("Failed to read key script")?;
            for step in &output.trace {
                println!(
                    "{:<8} committed={:?} composing={:?} text={:?}",
                    step.token.to_string(),
                    step.state.committed,
                    step.state.composing,
                    step.text
                );
            }
            println!("{}", output.text);
        }
        Command::Decompose { text } => {
            for ch in text.chars() {
                match decompose(ch) {
                    Some(comp) => println!(
                        "{} U+{:04X} {} {} {}",
                        ch,
                        ch as u32,
                        comp.initial_jamo().unwrap_or('-'),
                        comp.medial_jamo().unwrap_or('-'),
                        comp.final_jamo().unwrap_or('-'),
                    ),
                    None => println!("{} U+{:04X} not a Hangul syllable", ch, ch as u32),
                }
            }
        }
        Command::Compose {
            initial,
            medial,
            last,
        } => {
            match unicode::syllable_of(initial, medial, last) {
                Some(syllable) => println!("{}", syllable),
                None => bail!(
                    "{} + {} + {:?} does not form a syllable",
                    initial,
                    medial,
                    last
                ),
            }
        }
    }
    Ok(())
}
