//! UI commands and their console text forms.

use std::str::FromStr;

use orrery_camera::ViewMode;

use crate::AppError;

#[derive(Clone, Debug, PartialEq)]
pub enum UiCommand {
    SwitchView(ViewMode),
    FocusBody(String),
    SetTimeScale(f32),
    TogglePlayback,
    /// Force playback on or off.
    SetPlaying(bool),
    ResetView,
}

impl FromStr for UiCommand {
    type Err = AppError;

    /// Parses `view <solar|galaxy|universe>`, `focus <id>`, `speed <x>`,
    /// `toggle`, `pause`, `play` and `reset`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let unknown = || AppError::UnknownCommand(line.trim().to_string());
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or_else(unknown)?.to_ascii_lowercase();
        let arg = words.next();
        if words.next().is_some() {
            return Err(unknown());
        }

        match (verb.as_str(), arg) {
            ("view", Some(mode)) => Ok(UiCommand::SwitchView(
                mode.parse().map_err(|_| unknown())?,
            )),
            ("focus", Some(id)) => Ok(UiCommand::FocusBody(id.to_string())),
            ("speed", Some(x)) => Ok(UiCommand::SetTimeScale(
                x.parse().map_err(|_| unknown())?,
            )),
            ("toggle", None) => Ok(UiCommand::TogglePlayback),
            ("pause", None) => Ok(UiCommand::SetPlaying(false)),
            ("play", None) => Ok(UiCommand::SetPlaying(true)),
            ("reset", None) => Ok(UiCommand::ResetView),
            _ => Err(unknown()),
        }
    }
}
