//! Interactive free-text prompts for the two inputs.
//!
//! Only used when a positional argument is missing; parsing and validation
//! stay in `units` so the same rules apply to prompted and flag input.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::EtaError;
use crate::units::Unit;

/// Ask for the payload size.
pub fn ask_size() -> Result<String, EtaError> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("File size (M/G/T/P suffix, bare numbers are GB)")
        .interact_text()?;
    Ok(input)
}

/// Ask for the transfer speed, naming the contextual default unit.
pub fn ask_speed(default_unit: Unit) -> Result<String, EtaError> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "Transfer speed (e.g. 500M or 2G, bare numbers are {})",
            default_unit.speed_label()
        ))
        .interact_text()?;
    Ok(input)
}
