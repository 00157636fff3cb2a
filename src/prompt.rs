use crate::error::{ClivmError, Result};
use dialoguer::{Input, Select};
use std::io::ErrorKind;

/// One selectable entry: what the user sees and what the caller gets back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn plain(value: &str) -> Self {
        Self::new(value, value)
    }
}

pub trait Prompter {
    /// Pick one of `choices`; returns the chosen value.
    fn select(&self, question: &str, choices: &[Choice], default: usize) -> Result<String>;
    fn input(&self, question: &str, default: Option<&str>) -> Result<String>;
}

/// Terminal prompts. Esc and Ctrl-C map to `Cancelled`.
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn select(&self, question: &str, choices: &[Choice], default: usize) -> Result<String> {
        if choices.is_empty() {
            return Err(ClivmError::Cancelled);
        }
        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
        let picked = Select::new()
            .with_prompt(question)
            .items(&labels)
            .default(default.min(choices.len() - 1))
            .interact_opt()
            .map_err(prompt_error)?;
        picked
            .map(|i| choices[i].value.clone())
            .ok_or(ClivmError::Cancelled)
    }

    fn input(&self, question: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(question);
        if let Some(d) = default {
            input = input.default(d.to_string());
        }
        let answer = input.interact_text().map_err(prompt_error)?;
        Ok(answer.trim().to_string())
    }
}

fn prompt_error(e: dialoguer::Error) -> ClivmError {
    match e {
        dialoguer::Error::IO(io) if io.kind() == ErrorKind::Interrupted => ClivmError::Cancelled,
        other => ClivmError::Prompt(other),
    }
}
