//! Line input from the terminal, with command-line presets.

use std::io::{BufRead, ErrorKind, IsTerminal};

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::InputPrompter;

const URL_PROMPT: &str = "Enter the repository URL";
const LANGUAGE_PROMPT: &str = "Enter the language for the simplified instructions";

/// Prompts on the terminal; reads plain lines when stdin is piped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }

    fn ask(&self, prompt: &str, what: &str) -> Result<String, AppError> {
        if !std::io::stdin().is_terminal() {
            return read_piped_line(prompt, what);
        }

        match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
            Ok(value) => Ok(value),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Ok(String::new())
            }
            Err(err) => Err(AppError::Prompt { what: what.to_string(), details: err.to_string() }),
        }
    }
}

fn read_piped_line(prompt: &str, what: &str) -> Result<String, AppError> {
    println!("{}:", prompt);
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| AppError::Prompt { what: what.to_string(), details: e.to_string() })?;
    Ok(line)
}

impl InputPrompter for DialoguerPrompter {
    fn repository_url(&mut self) -> Result<String, AppError> {
        self.ask(URL_PROMPT, "repository URL")
    }

    fn language(&mut self) -> Result<String, AppError> {
        self.ask(LANGUAGE_PROMPT, "language")
    }
}

/// Answers from command-line flags, deferring to `fallback` for the rest.
#[derive(Debug, Clone)]
pub struct PresetPrompter<P: InputPrompter> {
    url: Option<String>,
    language: Option<String>,
    fallback: P,
}

impl<P: InputPrompter> PresetPrompter<P> {
    pub fn new(url: Option<String>, language: Option<String>, fallback: P) -> Self {
        Self { url, language, fallback }
    }
}

impl<P: InputPrompter> InputPrompter for PresetPrompter<P> {
    fn repository_url(&mut self) -> Result<String, AppError> {
        match self.url.take() {
            Some(url) => Ok(url),
            None => self.fallback.repository_url(),
        }
    }

    fn language(&mut self) -> Result<String, AppError> {
        match self.language.take() {
            Some(language) => Ok(language),
            None => self.fallback.language(),
        }
    }
}
