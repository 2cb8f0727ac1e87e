use crate::error::CliError;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value).map_err(CliError::JsonSerialize)?;
    println!("{json}");
    Ok(())
}

pub fn print_lines(lines: &[String]) {
    for line in lines.iter().filter(|l| !l.is_empty()) {
        println!("{line}");
    }
}
