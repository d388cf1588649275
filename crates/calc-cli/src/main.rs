use calc_cli::{CliLogOutput, Press, SessionStore};
use calc_core::{CoreConstants, LogLevel, evaluate_expression, format_number};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calc-cli")]
#[command(about = "Button-driven calculator with a persistent session", long_about = None)]
struct Cli {
    #[arg(
        long,
        env = "CALC_SESSION",
        default_value = "calc-session.json",
        value_name = "FILE",
        help = "Session file holding the token sequence and display flags"
    )]
    session: PathBuf,

    #[arg(short, long, help = "Print every diagnostic, not only failures")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Press one button
    Press {
        /// Button key: add, minus, multiply, divide, modulus, equals, c, delete, period or a digit key
        key: String,
        /// Literal values to append; defaults to the key's own symbol
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Press several buttons in order, e.g. `run 1 2 + 3 =`
    Run {
        #[arg(required = true, allow_hyphen_values = true)]
        presses: Vec<String>,
    },
    /// Print the current display
    Show,
    /// Evaluate an expression without touching the session
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Clear the session file
    Reset,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let store = SessionStore::new(&cli.session);
    let mut log_output = CliLogOutput::new(cli.verbose);

    if let Err(e) = run(cli.command, &store, &mut log_output) {
        println!("{}", CoreConstants::ERROR_TOKEN);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    if cli.verbose {
        eprintln!(
            "Session {}: {} warnings, {} errors",
            store.path().display(),
            log_output.count(LogLevel::Warning),
            log_output.count(LogLevel::Error)
        );
    }
}

fn run(command: Command, store: &SessionStore, log_output: &mut CliLogOutput) -> Result<(), String> {
    match command {
        Command::Press { key, values } => press(&Press::new(key, values), store, log_output),
        Command::Run { presses } => presses
            .iter()
            .try_for_each(|arg| press(&Press::parse(arg), store, log_output)),
        Command::Show => {
            println!("{}", store.load()?.render());
            Ok(())
        }
        Command::Eval { expression } => {
            let result = evaluate_expression(&expression).map_err(|e| e.to_string())?;
            println!("{}", format_number(result));
            Ok(())
        }
        Command::Reset => store.reset(),
    }
}

fn press(press: &Press, store: &SessionStore, log_output: &mut CliLogOutput) -> Result<(), String> {
    let transition = store.apply(press, log_output)?;

    if transition.redirect {
        log::info!("{press} reset the display");
    }
    println!("{}", transition.state.render());
    Ok(())
}
