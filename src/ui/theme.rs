//! Colours and the light/dark flag for the GUI

use egui::Color32;

use crate::config::ThemeMode;

/// Colour set for one appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub board_bg: Color32,
    pub cell_bg: Color32,
    pub cell_hover: Color32,
    pub placeholder: Color32,
    pub mark_x: Color32,
    pub mark_o: Color32,
    pub win_highlight: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    /// Name of the player to move
    pub text_active: Color32,
    pub play_button: Color32,
    pub stop_button: Color32,
}

pub const LIGHT: Palette = Palette {
    board_bg: Color32::from_rgb(206, 212, 218),
    cell_bg: Color32::from_rgb(248, 249, 250),
    cell_hover: Color32::from_rgb(233, 236, 239),
    placeholder: Color32::from_rgb(173, 181, 189),
    mark_x: Color32::from_rgb(220, 53, 69),
    mark_o: Color32::from_rgb(13, 110, 253),
    win_highlight: Color32::from_rgb(25, 135, 84),
    text_primary: Color32::from_rgb(33, 37, 41),
    text_muted: Color32::from_rgb(108, 117, 125),
    text_active: Color32::from_rgb(13, 110, 253),
    play_button: Color32::from_rgb(25, 135, 84),
    stop_button: Color32::from_rgb(220, 53, 69),
};

pub const DARK: Palette = Palette {
    board_bg: Color32::from_rgb(73, 80, 87),
    cell_bg: Color32::from_rgb(33, 37, 41),
    cell_hover: Color32::from_rgb(52, 58, 64),
    placeholder: Color32::from_rgb(90, 98, 104),
    mark_x: Color32::from_rgb(234, 134, 143),
    mark_o: Color32::from_rgb(110, 168, 254),
    win_highlight: Color32::from_rgb(117, 183, 152),
    text_primary: Color32::from_rgb(222, 226, 230),
    text_muted: Color32::from_rgb(134, 142, 150),
    text_active: Color32::from_rgb(110, 168, 254),
    play_button: Color32::from_rgb(25, 135, 84),
    stop_button: Color32::from_rgb(176, 42, 55),
};

// Sizes
pub const BOARD_MARGIN: f32 = 8.0;
pub const CELL_GAP: f32 = 4.0;
pub const MAX_BOARD_PX: f32 = 560.0;
pub const MARK_RATIO: f32 = 0.3;
pub const MARK_STROKE: f32 = 6.0;
pub const PLACEHOLDER_STROKE: f32 = 1.5;
pub const WIN_STROKE: f32 = 4.0;

/// Display-only dark/light flag.
///
/// Follows the OS preference until the user toggles it; from then on the
/// explicit choice wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    system_dark: bool,
    forced: Option<bool>,
}

impl ThemeState {
    pub fn new(mode: ThemeMode, system_dark: bool) -> Self {
        let forced = match mode {
            ThemeMode::System => None,
            ThemeMode::Light => Some(false),
            ThemeMode::Dark => Some(true),
        };
        Self {
            system_dark,
            forced,
        }
    }

    #[inline]
    pub fn is_dark(&self) -> bool {
        self.forced.unwrap_or(self.system_dark)
    }

    /// Flip the appearance and stop following the OS
    pub fn toggle(&mut self) {
        self.forced = Some(!self.is_dark());
    }

    /// Record the latest OS preference
    pub fn observe_system(&mut self, dark: bool) {
        self.system_dark = dark;
    }

    pub fn palette(&self) -> &'static Palette {
        if self.is_dark() {
            &DARK
        } else {
            &LIGHT
        }
    }

    pub fn egui_theme(&self) -> egui::Theme {
        if self.is_dark() {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        }
    }

    /// Label for the toggle button, showing what it switches to
    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark() {
            "☀"
        } else {
            "🌙"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follows_system() {
        let mut theme = ThemeState::new(ThemeMode::System, false);
        assert!(!theme.is_dark());
        theme.observe_system(true);
        assert!(theme.is_dark());
        assert_eq!(theme.palette(), &DARK);
    }

    #[test]
    fn test_toggle_overrides_system() {
        let mut theme = ThemeState::new(ThemeMode::System, true);
        theme.toggle();
        assert!(!theme.is_dark());
        theme.observe_system(true);
        assert!(!theme.is_dark());
        theme.toggle();
        assert!(theme.is_dark());
    }

    #[test]
    fn test_forced_modes() {
        assert!(ThemeState::new(ThemeMode::Dark, false).is_dark());
        assert!(!ThemeState::new(ThemeMode::Light, true).is_dark());
        assert_eq!(ThemeState::new(ThemeMode::Light, true).egui_theme(), egui::Theme::Light);
    }
}
