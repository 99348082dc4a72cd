//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{Align, Align2, CentralPanel, Context, Layout, RichText, TopBottomPanel};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::{Palette, ThemeState};
use crate::board::{Player, MAX_SIZE, MIN_SIZE};
use crate::config::Config;
use crate::game::{GameState, Phase};

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    theme: ThemeState,
}

impl TicTacToeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        let system_dark = cc.egui_ctx.system_theme() == Some(egui::Theme::Dark);
        Self::with_config(config, system_dark)
    }

    fn with_config(config: &Config, system_dark: bool) -> Self {
        Self {
            state: GameState::new(config.board_size),
            board_view: BoardView::default(),
            theme: ThemeState::new(config.theme, system_dark),
        }
    }

    /// Play starts a game, Stop abandons it
    fn toggle_play(&mut self) {
        if self.state.is_playing() {
            self.state.stop_game();
        } else {
            self.state.start_game(self.state.size());
        }
    }

    /// Track the OS colour scheme and push the current choice into egui
    fn sync_theme(&mut self, ctx: &Context) {
        if let Some(system) = ctx.system_theme() {
            self.theme.observe_system(system == egui::Theme::Dark);
        }
        if ctx.theme() != self.theme.egui_theme() {
            debug!(dark = self.theme.is_dark(), "switching theme");
        }
        ctx.set_theme(self.theme.egui_theme());
    }

    /// Render the header with the theme toggle
    fn render_header(&mut self, ctx: &Context) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(RichText::new(self.theme.toggle_label()).size(18.0)).clicked() {
                    self.theme.toggle();
                }
            });
        });
    }

    /// Player name, highlighted when it is their turn
    fn player_label(&self, player: Player, palette: &Palette) -> RichText {
        let symbol = player.mark().symbol();
        let text = match player {
            Player::One => format!("{} Player 1", symbol),
            Player::Two => format!("Player 2 {}", symbol),
        };
        let color = if !self.state.is_playing() {
            palette.text_primary
        } else if self.state.current_player() == player {
            palette.text_active
        } else {
            palette.text_muted
        };
        RichText::new(text).size(26.0).strong().color(color)
    }

    /// Render player names and the Play/Stop button
    fn render_controls(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        ui.horizontal(|ui| {
            ui.label(self.player_label(Player::One, palette));
            ui.add_space(12.0);

            let (text, fill) = if self.state.is_playing() {
                ("Stop!", palette.stop_button)
            } else {
                ("Play!", palette.play_button)
            };
            let button = egui::Button::new(RichText::new(text).size(22.0).color(egui::Color32::WHITE)).fill(fill);
            if ui.add_enabled(!self.state.phase().is_finished(), button).clicked() {
                self.toggle_play();
            }

            ui.add_space(12.0);
            ui.label(self.player_label(Player::Two, palette));
        });
    }

    /// Render the board size stepper
    fn render_size_stepper(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        let editable = self.state.phase() == Phase::Idle;
        let size = self.state.size();

        ui.horizontal(|ui| {
            if ui.add_enabled(editable && size > MIN_SIZE, egui::Button::new(RichText::new("-").size(20.0))).clicked() {
                self.state.decrease_size();
            }
            ui.label(RichText::new(format!("Board Size: {}", size)).size(20.0).color(palette.text_primary));
            if ui.add_enabled(editable && size < MAX_SIZE, egui::Button::new(RichText::new("+").size(20.0))).clicked() {
                self.state.increase_size();
            }
        });
    }

    /// Render the main column: title, controls, board, stepper
    fn render_main(&mut self, ctx: &Context, palette: &Palette) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("Tic-Tac-Toe").size(32.0).strong().color(palette.text_primary));
                ui.add_space(8.0);

                self.render_controls(ui, palette);
                ui.add_space(12.0);

                // Leave room for the stepper below the board
                let reserve = 60.0;
                let clicked = ui
                    .allocate_ui(egui::vec2(ui.available_width(), ui.available_height() - reserve), |ui| {
                        self.board_view.show(ui, &self.state, palette)
                    })
                    .inner;
                if let Some(pos) = clicked {
                    self.state.apply_move(pos.row as usize, pos.col as usize);
                }

                ui.add_space(12.0);
                self.render_size_stepper(ui, palette);
            });
        });
    }

    /// Winner or draw window; closing it dismisses the outcome
    fn render_outcome(&mut self, ctx: &Context, palette: &Palette) {
        let (title, message, button) = match (self.state.phase(), self.state.winner()) {
            (Phase::Won, Some(winner)) => (
                "We have a winner!",
                format!("🎉 Player {} wins! 🎉", winner.number()),
                palette.play_button,
            ),
            (Phase::Draw, _) => ("We have a draw...", "This game is a draw...".to_string(), palette.text_active),
            _ => return,
        };

        let mut open = true;
        let mut dismissed = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new(message).size(26.0).color(palette.text_primary));
                    ui.add_space(12.0);
                    let try_again = egui::Button::new(RichText::new("Try again").size(20.0).color(egui::Color32::WHITE)).fill(button);
                    if ui.add(try_again).clicked() {
                        dismissed = true;
                    }
                    ui.add_space(4.0);
                });
            });

        if !open || dismissed {
            self.state.reset_outcome();
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // Space - Play/Stop
            if i.key_pressed(egui::Key::Space) && !self.state.phase().is_finished() {
                self.toggle_play();
            }

            // Enter / Escape - dismiss outcome
            if i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape) {
                self.state.reset_outcome();
            }

            // +/- - Board size
            if i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals) {
                self.state.increase_size();
            }
            if i.key_pressed(egui::Key::Minus) {
                self.state.decrease_size();
            }

            // T - Toggle theme
            if i.key_pressed(egui::Key::T) {
                self.theme.toggle();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.sync_theme(ctx);

        let palette = self.theme.palette();
        self.render_header(ctx);
        self.render_main(ctx, palette);
        self.render_outcome(ctx, palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;
    use crate::ui::theme::LIGHT;

    #[test]
    fn test_app_starts_idle_with_config() {
        let config = Config {
            board_size: 6,
            theme: ThemeMode::Dark,
        };
        let app = TicTacToeApp::with_config(&config, false);
        assert_eq!(app.state.size(), 6);
        assert_eq!(app.state.phase(), Phase::Idle);
        assert!(app.theme.is_dark());
    }

    #[test]
    fn test_player_labels_show_marks() {
        let app = TicTacToeApp::with_config(&Config::default(), false);
        assert_eq!(app.player_label(Player::One, &LIGHT).text(), "❌ Player 1");
        assert_eq!(app.player_label(Player::Two, &LIGHT).text(), "Player 2 ⭕");
    }

    #[test]
    fn test_toggle_play() {
        let mut app = TicTacToeApp::with_config(&Config::default(), false);
        app.toggle_play();
        assert_eq!(app.state.phase(), Phase::InProgress);
        app.state.apply_move(0, 0);
        app.toggle_play();
        assert_eq!(app.state.phase(), Phase::Idle);
        assert_eq!(app.state.moves_played(), 0);
    }
}
