//! pd: poker-dice roll scorer.
//!
//! Modes:
//! - `pd 3 1 5 4 2`   score one roll from the arguments
//! - `pd`             interactive prompt loop
//! - `pd tui`         full-screen terminal UI with roll history

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use pd_core::{classify, parse_tokens, validate_and_sort_ints, Combination, Dice};

fn print_help() {
    eprintln!(
        r#"pd - poker-dice roll scorer

USAGE:
    pd [VALUES...]
    pd tui

Five dice values (1-6) are validated, sorted, and classified into the
highest-precedence combination (five/four/three of a kind, full house,
two pairs, one pair, or none).

MODES:
    pd 3 1 5 4 2    Score a single roll and exit
    pd              Prompt for rolls until `q` or EOF
    pd tui          Full-screen UI with a session history

OPTIONS:
    -h, --help      Print this help message
    -V, --version   Print version
"#
    );
}

fn print_version() {
    println!("pd {}", env!("CARGO_PKG_VERSION"));
}

fn format_results(dice: &Dice) -> String {
    let faces: Vec<String> = dice.iter().map(|d| d.to_string()).collect();
    format!("Dice game results: {}", faces.join(" "))
}

/// Run one roll through the core pipeline. Errors from both stages are
/// flattened to their display text; the caller decides how to render them.
fn score_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<(Dice, Combination), String> {
    let values = parse_tokens(tokens).map_err(|e| e.to_string())?;
    let dice = validate_and_sort_ints(&values).map_err(|e| e.to_string())?;
    Ok((dice, classify(dice)))
}

fn cmd_score(args: &[String]) {
    match score_tokens(args) {
        Ok((dice, combo)) => {
            println!("{}", format_results(&dice));
            println!("{}", combo.message());
        }
        Err(msg) => {
            eprintln!("Error: {msg}");
            process::exit(1);
        }
    }
}

fn cmd_prompt() {
    let stdin = io::stdin();
    let mut roll_no = 0u32;

    println!("Roll five dice, then enter the results separated by spaces (q to quit):");
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF or broken stdin
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "q" || line == "quit" {
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match score_tokens(&tokens) {
            Ok((dice, combo)) => {
                roll_no += 1;
                println!(
                    "Roll {roll_no}: {} {}",
                    combo.message(),
                    format_results(&dice)
                );
            }
            Err(msg) => {
                println!("Error: {msg} Try again.");
            }
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        cmd_prompt();
        return;
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            print_help();
        }
        "-V" | "--version" => {
            print_version();
        }
        "tui" => {
            if let Err(e) = pd_tui::run() {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        _ => {
            cmd_score(&args[1..]);
        }
    }
}
