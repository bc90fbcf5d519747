use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

use crate::entity::EntityType;

pub const EXIT_INDEX: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Export(EntityType),
    Quit,
}

/// Highest index accepted by the menu.
fn max_index() -> &'static str {
    EntityType::ALL
        .iter()
        .map(|e| e.menu_index())
        .chain(std::iter::once(EXIT_INDEX))
        .max()
        .unwrap_or(EXIT_INDEX)
}

pub fn parse_choice(line: &str) -> Option<MenuChoice> {
    let line = line.trim();
    if line == EXIT_INDEX {
        return Some(MenuChoice::Quit);
    }
    EntityType::from_menu_index(line).map(MenuChoice::Export)
}

pub fn print_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "{}", "Menu:".bold())?;
    for entity in EntityType::ALL {
        writeln!(output, "{}. {}", entity.menu_index(), entity.menu_label())?;
    }
    writeln!(output, "{}. Quit", EXIT_INDEX)?;
    Ok(())
}

/// Shows the menu until a valid option is entered. Closed input counts as quit.
pub fn prompt_choice<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<MenuChoice> {
    let max = max_index();
    loop {
        print_menu(&mut output)?;
        write!(output, "Choose an option ({}-{}): ", EXIT_INDEX, max)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(MenuChoice::Quit);
        }

        match parse_choice(&line) {
            Some(MenuChoice::Quit) => {
                writeln!(output, "{}", "Goodbye!".green())?;
                return Ok(MenuChoice::Quit);
            }
            Some(choice) => return Ok(choice),
            None => writeln!(
                output,
                "{}",
                format!(
                    "Invalid option '{}'. Please choose a number between {} and {}.",
                    line.trim(),
                    EXIT_INDEX,
                    max
                )
                .yellow()
            )?,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_menu(input: &str) -> (MenuChoice, String) {
        colored::control::set_override(false);
        let mut output = Vec::new();
        let choice = prompt_choice(Cursor::new(input.as_bytes()), &mut output).unwrap();
        (choice, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parse_choice_works() {
        assert_eq!(parse_choice("1\n"), Some(MenuChoice::Export(EntityType::Contracts)));
        assert_eq!(parse_choice(" 2 "), Some(MenuChoice::Export(EntityType::Departments)));
        assert_eq!(parse_choice("3"), Some(MenuChoice::Export(EntityType::Employees)));
        assert_eq!(parse_choice("0"), Some(MenuChoice::Quit));
        assert_eq!(parse_choice("4"), None);
        assert_eq!(parse_choice("employees"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn menu_selects_entity() {
        let (choice, output) = run_menu("3\n");
        assert_eq!(choice, MenuChoice::Export(EntityType::Employees));
        assert!(output.contains("1. Fetch contracts"));
        assert!(output.contains("0. Quit"));
        assert!(output.contains("Choose an option (0-3): "));
    }

    #[test]
    fn menu_reprompts_on_invalid_input() {
        let (choice, output) = run_menu("9\nabc\n\n2\n");
        assert_eq!(choice, MenuChoice::Export(EntityType::Departments));
        assert_eq!(output.matches("Invalid option").count(), 3);
        assert_eq!(output.matches("Menu:").count(), 4);
    }

    #[test]
    fn menu_quit() {
        let (choice, output) = run_menu("0\n");
        assert_eq!(choice, MenuChoice::Quit);
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn menu_closed_input_quits() {
        let (choice, _) = run_menu("7\n");
        assert_eq!(choice, MenuChoice::Quit);
    }
}
