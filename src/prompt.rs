// src/prompt.rs
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::storage::ExportChoice;

const URLS_PROMPT: &str = "Enter a comma-separated list of car URLs: ";
const EXPORT_QUESTION: &str = "Would you like to save the results as a file? If so, select the file type:";

/// Splits user input on commas and trims each locator.
pub fn parse_locators(input: &str) -> Vec<String> {
    input.split(',').map(|url| url.trim().to_string()).collect()
}

/// Accepts a menu number or a choice name. Blank input is the default, `None`.
pub fn parse_export_choice(input: &str) -> Option<ExportChoice> {
    let answer = input.trim();
    if answer.is_empty() {
        return Some(ExportChoice::None);
    }

    ExportChoice::ALL.iter().enumerate().find_map(|(i, choice)| {
        let number = (i + 1).to_string();
        (answer == number || answer.eq_ignore_ascii_case(choice.label())).then_some(*choice)
    })
}

pub struct Prompter {
    editor: DefaultEditor,
}

impl Prompter {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self { editor: DefaultEditor::new()? })
    }

    pub fn ask_locators(&mut self) -> Result<Vec<String>, ReadlineError> {
        let line = self.editor.readline(URLS_PROMPT)?;
        Ok(parse_locators(&line))
    }

    /// Asks until the answer names one of the choices.
    pub fn ask_export_choice(&mut self) -> Result<ExportChoice, ReadlineError> {
        println!("{}", EXPORT_QUESTION);
        for (i, choice) in ExportChoice::ALL.iter().enumerate() {
            println!("  {}) {}", i + 1, choice.label());
        }

        loop {
            let line = self.editor.readline("Choice [None]: ")?;
            match parse_export_choice(&line) {
                Some(choice) => return Ok(choice),
                None => println!("Please answer 1-3, CSV, Excel or None."),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locators_trims_each_entry() {
        let urls = parse_locators(" https://a.ie/1 ,https://a.ie/2,   https://a.ie/3");
        assert_eq!(urls, vec!["https://a.ie/1", "https://a.ie/2", "https://a.ie/3"]);
    }

    #[test]
    fn test_parse_locators_keeps_empty_entries() {
        assert_eq!(parse_locators(""), vec![""]);
        assert_eq!(parse_locators("https://a.ie/1,,"), vec!["https://a.ie/1", "", ""]);
    }

    #[test]
    fn test_parse_export_choice() {
        assert_eq!(parse_export_choice(""), Some(ExportChoice::None));
        assert_eq!(parse_export_choice("  \n"), Some(ExportChoice::None));
        assert_eq!(parse_export_choice("1"), Some(ExportChoice::Csv));
        assert_eq!(parse_export_choice("csv"), Some(ExportChoice::Csv));
        assert_eq!(parse_export_choice("2"), Some(ExportChoice::Excel));
        assert_eq!(parse_export_choice(" EXCEL "), Some(ExportChoice::Excel));
        assert_eq!(parse_export_choice("3"), Some(ExportChoice::None));
        assert_eq!(parse_export_choice("none"), Some(ExportChoice::None));
        assert_eq!(parse_export_choice("pdf"), None);
        assert_eq!(parse_export_choice("4"), None);
    }
}
