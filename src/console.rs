use std::fmt::Display;

use colored::Colorize;

pub fn section(title: &str) -> String {
    format!("\n{}\n{}", title.bold(), "=".repeat(title.chars().count()))
}

pub fn value(label: &str, value: impl Display) -> String {
    format!("  {} {}", format!("{label}:").cyan(), value)
}

pub fn outcome<T: Display, E: Display>(label: &str, result: &Result<T, E>) -> String {
    match result {
        Ok(value) => format!("  {} {label}: {value}", "ok".green()),
        Err(err) => format!("  {} {label}: {err}", "err".red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_underline_matches_title() {
        colored::control::set_override(false);
        assert_eq!(section("Lab 2"), "\nLab 2\n=====");
    }

    #[test]
    fn test_outcome_labels() {
        colored::control::set_override(false);
        let ok: Result<u64, String> = Ok(3);
        let err: Result<u64, String> = Err("missing".into());
        assert_eq!(outcome("next id", &ok), "  ok next id: 3");
        assert_eq!(outcome("lookup", &err), "  err lookup: missing");
        assert_eq!(value("pages", 200), "  pages: 200");
    }
}
