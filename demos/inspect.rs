use css_color_parser::{Color, parse, values::named};

use colored::*;
use strsim::levenshtein;

use anyhow::Result;
use std::{collections::BTreeMap, env};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect::<Vec<String>>();
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "help" => {
            if args.len() == 3 {
                print_command_help(&args[2]);
            } else {
                print_usage();
            }
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: cargo run --example inspect parse COLOR [..]");
                return Ok(());
            }
            for input in &args[2..] {
                match parse(input) {
                    Some(color) => print_color(input, &color),
                    None => print_rejected(input),
                }
            }
        }
        "hex" => {
            if args.len() < 3 {
                eprintln!("Usage: cargo run --example inspect hex COLOR [..]");
                return Ok(());
            }
            for input in &args[2..] {
                match parse(input) {
                    Some(color) => println!("{:<28} {}", input, color.to_hex_string().green()),
                    None => print_rejected(input),
                }
            }
        }
        "names" => {
            let filter = args.get(2).map(|f| f.to_ascii_lowercase());
            for name in named::names() {
                if let Some(f) = &filter
                    && !name.contains(f.as_str())
                {
                    continue;
                }
                if let Some(color) = parse(name) {
                    println!("{:<22} {}", name.cyan(), color);
                }
            }
        }
        other => {
            eprintln!("Unknown command: {}", other);
            let commands = get_commands();
            let command_list: Vec<&str> = commands.keys().copied().collect();
            if let Some(suggested) = suggest(other, &command_list) {
                eprintln!("Did you mean: {} ?", suggested);
            }
        }
    }

    Ok(())
}

fn print_color(input: &str, color: &Color) {
    println!(
        "{:<28} {}  {}",
        input,
        color.to_string().green().bold(),
        color.to_hex_string().dimmed()
    );
}

fn print_rejected(input: &str) {
    println!("{:<28} {}", input, "<no color>".red().bold());

    // キーワードの打ち間違いなら近いものを提案
    let trimmed = input.trim().to_ascii_lowercase();
    if trimmed.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
        let names: Vec<&str> = named::names().collect();
        if let Some(suggested) = suggest(&trimmed, &names) {
            println!("{:<28} did you mean {} ?", "", suggested.yellow());
        }
    }
}

fn print_usage() {
    let commands = get_commands();
    println!("{}", "CSS Color Inspector".bold().underline());
    println!("\n{}", "Usage:".bold());
    println!("  cargo run --example inspect [COMMAND] [ARGS]\n");

    println!("{}", "Available Commands:".bold());
    for (name, (description, args, _detail)) in &commands {
        println!(
            "  {:<8} {:<12} - {}",
            name.green().bold(),
            args.cyan(),
            description
        );
    }

    println!("\n{}", "Note:".bold());
    println!("  - Colors containing spaces or parentheses must be quoted.");
    println!("  - Set RUST_LOG=debug to see why an input was rejected.");
}

fn print_command_help(command: &str) {
    let commands = get_commands();
    if let Some((description, args, detail)) = commands.get(command) {
        println!("{}", format!("Help for command: {}", command).bold().underline());
        println!("\n{}:", "Description".bold());
        println!("  {}", description);
        println!("\n{}:", "Usage".bold());
        println!("  cargo run --example inspect {} {}", command, args);
        if !detail.is_empty() {
            println!("\n{}:", "Details".bold());
            println!("  {}", detail);
        }
    } else {
        eprintln!("Unknown command: {}", command);
        let command_list: Vec<&str> = commands.keys().copied().collect();
        if let Some(suggested) = suggest(command, &command_list) {
            eprintln!("Did you mean: {} ?", suggested);
        }
    }
}

fn suggest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|&c| (c, levenshtein(input, c)))
        .min_by_key(|&(_, d)| d)
        .and_then(|(c, d)| if d <= 4 { Some(c) } else { None })
}

#[rustfmt::skip]
fn get_commands<'a>() -> BTreeMap<&'a str, (&'a str, &'a str, &'a str)> {
    let mut map = BTreeMap::new();

    map.insert(
        "parse",
        (
            "Parse each argument and print the normalized rgba() value.",
            "COLOR [..]",
            "Unrecognized keywords get a suggestion for the closest known name.",
        ),
    );
    map.insert(
        "hex",
        (
            "Parse each argument and print it as #rrggbb or #rrggbbaa.",
            "COLOR [..]",
            "",
        ),
    );
    map.insert(
        "names",
        (
            "List the named color keywords.",
            "[FILTER]",
            "When FILTER is given only keywords containing it are listed.",
        ),
    );
    map.insert(
        "help",
        (
            "Show usage, or details for one command.",
            "[COMMAND]",
            "",
        ),
    );

    map
}
