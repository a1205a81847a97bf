use anyhow::Result;
use css_color_parser::Color;
use std::{
    env,
    io::{self, BufRead, Write},
};

fn describe(color: Option<Color>) -> String {
    match color {
        Some(c) => c.to_string(),
        None => "<no color>".to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.is_empty() {
        for input in &args {
            writeln!(out, "{}", describe(css_color_parser::parse(input)))?;
        }
        return Ok(());
    }

    // 引数がなければ標準入力から1行ずつ読む
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(out, "{}", describe(css_color_parser::parse(&line)))?;
    }

    Ok(())
}
