//! Line-oriented user input
//!
//! Prompts go through [`InputProvider`] so the selector and the confirmation
//! steps can be driven by a terminal, by piped stdin, or by canned answers.

use std::io::{BufRead, IsTerminal, Write};

use inquire::{Confirm, Text};

use crate::error::{Result, SkillError};

/// Source of user answers
pub trait InputProvider {
    /// Whether a human is attached (controls whether optional offers are made)
    fn is_interactive(&self) -> bool;

    /// Read one line. `None` means the input was closed or the prompt skipped.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Interprets a typed yes/no answer; anything unrecognised is "no"
pub fn parse_yes_no(answer: &str, default: bool) -> bool {
    match answer.trim().to_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    }
}

/// Terminal-backed input
///
/// Uses inquire prompts on a real terminal and plain line reads when stdin is
/// redirected, so answers can be piped in (`echo 1,3 | skilldeploy install`).
pub struct TerminalInput {
    interactive: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            interactive: std::io::stdin().is_terminal() && std::io::stdout().is_terminal(),
        }
    }

    fn read_piped_line(prompt: &str) -> Result<Option<String>> {
        print!("{prompt} ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| SkillError::PromptFailed {
                message: e.to_string(),
            })?;
        println!();

        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputProvider for TerminalInput {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if !self.interactive {
            return Self::read_piped_line(prompt);
        }
        Ok(Text::new(prompt).prompt_skippable()?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        if !self.interactive {
            let hint = if default { "[Y/n]" } else { "[y/N]" };
            let answer = Self::read_piped_line(&format!("{prompt} {hint}"))?;
            return Ok(answer.map_or(default, |a| parse_yes_no(&a, default)));
        }
        Ok(Confirm::new(prompt)
            .with_default(default)
            .prompt_skippable()?
            .unwrap_or(false))
    }
}

/// Canned answers for tests
#[cfg(test)]
pub struct ScriptedInput {
    answers: std::collections::VecDeque<String>,
    interactive: bool,
    /// Every prompt that was shown, in order
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            interactive: true,
            prompts: Vec::new(),
        }
    }

    /// Scripted input that reports itself as non-interactive
    pub fn piped<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            interactive: false,
            ..Self::new(answers)
        }
    }
}

#[cfg(test)]
impl InputProvider for ScriptedInput {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        self.prompts.push(prompt.to_string());
        Ok(self
            .answers
            .pop_front()
            .map_or(default, |a| parse_yes_no(&a, default)))
    }
}
