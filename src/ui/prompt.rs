//! Prompt surface wrapping `dialoguer`.

use anyhow::Result;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

/// Interactive prompt/display handle used by every menu flow.
pub struct Console {
    theme: ColorfulTheme,
    term: Term,
}

impl Console {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stdout(),
        }
    }

    pub fn clear(&self) {
        let _ = self.term.clear_screen();
    }

    /// Free-text question.
    pub fn ask_text(&self, prompt: &str) -> Result<String> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()?;
        Ok(answer)
    }

    /// Free-text question with a prefilled default.
    pub fn ask_text_with_default(&self, prompt: &str, default: &str) -> Result<String> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        Ok(answer)
    }

    /// Single-select menu; returns the index of the chosen option.
    pub fn ask_choice<T: ToString>(&self, prompt: &str, options: &[T]) -> Result<usize> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact()?;
        Ok(index)
    }

    /// Multi-select menu with preset checked states; returns chosen indexes.
    pub fn ask_multi_choice<T: ToString>(
        &self,
        prompt: &str,
        options: &[(T, bool)],
    ) -> Result<Vec<usize>> {
        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items_checked(options)
            .interact()?;
        Ok(picked)
    }

    /// Yes/no question, defaulting to no.
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(answer)
    }

    /// Block until the user presses a key.
    pub fn pause(&self) {
        println!("\n{}", style("Press any key to continue...").dim());
        let _ = self.term.read_key();
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
