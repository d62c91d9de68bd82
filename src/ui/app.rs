//! Main application for the Queen's Game GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::theme::*;
use crate::board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::config::GameConfig;
use crate::session::{EventOutcome, GameStatus, InputEvent, Session};

/// Main Queen's Game application
pub struct QueensApp {
    session: Session,
    board_view: BoardView,
    /// Parameters for the next restart, edited in the settings card
    pending: GameConfig,
    message: Option<String>,
}

impl QueensApp {
    /// Create the app around an already validated session
    pub fn new(_cc: &eframe::CreationContext<'_>, session: Session) -> Self {
        Self {
            pending: session.config().clone(),
            session,
            board_view: BoardView::default(),
            message: None,
        }
    }

    /// Feed one input event to the session and keep the status message current
    fn dispatch(&mut self, event: InputEvent) {
        match self.session.handle_event(event) {
            Ok(EventOutcome::Rejected(err)) => {
                self.message = Some(format!("Invalid move! {}", err));
            }
            Ok(EventOutcome::Moved(_)) | Ok(EventOutcome::Restarted) => self.message = None,
            Ok(EventOutcome::Selected(_)) | Ok(EventOutcome::Ignored) => {}
            Err(err) => {
                log::error!("restart failed: {}", err);
                self.message = Some(err.to_string());
            }
        }
    }

    /// Restart with the parameters from the settings card
    fn restart(&mut self) {
        match self.session.restart_with(self.pending.clone()) {
            Ok(()) => self.message = None,
            Err(err) => {
                log::warn!("rejected parameters: {}", err);
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Restart Game (N)").clicked() {
                        self.restart();
                        ui.close_menu();
                    }
                    if ui.button("Same Parameters").clicked() {
                        self.dispatch(InputEvent::Restart);
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.session.board().size();
                    ui.label(format!("{}x{} board", size, size));
                });
            });
        });
    }

    /// Render the side panel with score, status and settings
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_settings_card(ui);

                if self.session.status().is_terminal() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("♛").size(22.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("QUEEN'S GAME").size(20.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("Reach the goal with the highest score possible!")
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let score = self.session.score();
            let initial = self.session.config().initial_score;
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(score.to_string())
                        .size(28.0)
                        .strong()
                        .color(score_color(score, initial)),
                );
                ui.label(RichText::new(format!("/ {}", initial)).size(12.0).color(TEXT_SECONDARY));
            });

            ui.add_space(6.0);
            let (status, color) = match self.session.status() {
                GameStatus::InProgress if self.session.selected().is_some() => {
                    ("Pick a destination", STATUS_WARNING)
                }
                GameStatus::InProgress => ("Click the queen to select it", STATUS_PLAYING),
                GameStatus::Won => ("Goal reached", WIN_HIGHLIGHT),
                GameStatus::Lost => ("Out of points", STATUS_LOST),
            };
            ui.label(RichText::new(status).size(12.0).color(color));

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!(
                    "Queen at {}  ·  Move #{}",
                    self.session.queen(),
                    self.session.history().len()
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("NEXT GAME").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            egui::Grid::new("settings").num_columns(2).show(ui, |ui| {
                ui.label(RichText::new("Board size").color(TEXT_SECONDARY));
                ui.add(
                    egui::DragValue::new(&mut self.pending.board_size)
                        .range(MIN_BOARD_SIZE..=MAX_BOARD_SIZE),
                );
                ui.end_row();

                ui.label(RichText::new("Obstacles").color(TEXT_SECONDARY));
                ui.add(egui::DragValue::new(&mut self.pending.obstacles).range(0..=1000));
                ui.end_row();

                ui.label(RichText::new("Initial score").color(TEXT_SECONDARY));
                ui.add(egui::DragValue::new(&mut self.pending.initial_score).range(1..=100_000));
                ui.end_row();
            });

            ui.add_space(8.0);
            if ui.button("Restart Game").clicked() {
                self.restart();
            }
        });
    }

    fn render_game_over_card(&self, ui: &mut egui::Ui) {
        let (text, fill) = match self.session.status() {
            GameStatus::Won => (
                format!(
                    "Congratulations! You've reached the goal with a score of {}.",
                    self.session.score()
                ),
                egui::Color32::from_rgb(45, 80, 55),
            ),
            _ => (
                "Game over! You ran out of points.".to_string(),
                egui::Color32::from_rgb(90, 40, 40),
            ),
        };

        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.label(RichText::new(text).size(13.0).strong().color(TEXT_PRIMARY));
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG))
            .show(ctx, |ui| {
                let clicked = self.board_view.show(
                    ui,
                    self.session.board(),
                    self.session.selected(),
                    self.session.status().is_terminal(),
                );

                if let Some(pos) = clicked {
                    self.dispatch(InputEvent::Click(pos));
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        // N - restart with the settings card parameters
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.restart();
        }
    }
}

impl eframe::App for QueensApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
