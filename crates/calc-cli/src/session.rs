use calc_core::{CalculatorState, LogOutput, Transition, handle_button_event};
use std::path::{Path, PathBuf};

use crate::press::Press;

/// JSON file holding one calculator session between invocations.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored state; a session that was never saved starts empty.
    pub fn load(&self) -> Result<CalculatorState, String> {
        if !self.path.exists() {
            return Ok(CalculatorState::default());
        }

        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read session: {e}"))?;

        serde_json::from_str::<CalculatorState>(&contents)
            .map_err(|e| format!("Failed to parse session: {e}"))
    }

    pub fn save(&self, state: &CalculatorState) -> Result<(), String> {
        let contents = serde_json::to_string_pretty(state)
            .map_err(|e| format!("Failed to serialize session: {e}"))?;

        std::fs::write(&self.path, contents).map_err(|e| format!("Failed to write session: {e}"))
    }

    pub fn reset(&self) -> Result<(), String> {
        self.save(&CalculatorState::default())
    }

    /// Loads the session, applies one press and writes the result back before
    /// returning, so the next press always sees this one.
    pub fn apply(&self, press: &Press, log: &mut dyn LogOutput) -> Result<Transition, String> {
        let state = self.load()?;
        let transition = handle_button_event(&press.key, &press.values, &state, log);
        self.save(&transition.state)?;
        log::debug!("{} -> {}", press, transition.state.render());
        Ok(transition)
    }
}
