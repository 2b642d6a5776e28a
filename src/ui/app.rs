//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::board::Mark;
use crate::search::SearchConfig;

use super::board_view::BoardView;
use super::game_state::{GameOutcome, GameState};
use super::theme::*;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,

    // Pending settings, applied when a new game starts
    depth_limit: u8,
    pruning_enabled: bool,
    ai_first: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        let config = SearchConfig::default();
        Self {
            state: GameState::new(config, false),
            board_view: BoardView::default(),
            show_debug: true,
            depth_limit: config.depth_limit,
            pruning_enabled: config.pruning_enabled,
            ai_first: false,
        }
    }
}

impl TicTacToeApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Start a fresh game with the pending settings
    fn new_game(&mut self) {
        let config = SearchConfig {
            depth_limit: self.depth_limit,
            pruning_enabled: self.pruning_enabled,
        };
        self.state = GameState::new(config, self.ai_first);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let pruning = if self.state.config.pruning_enabled {
                        "alpha-beta"
                    } else {
                        "minimax"
                    };
                    ui.label(format!(
                        "You: X · AI: O · depth {} · {}",
                        self.state.config.depth_limit, pruning
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_settings_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
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

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("✕◯").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(
                RichText::new("TIC-TAC-TOE")
                    .size(22.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("4×4 minimax").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_human = self.state.current_turn == Mark::X;
            let (symbol, name) = if is_human { ("✕", "YOU") } else { ("◯", "AI") };

            ui.horizontal(|ui| {
                ui.label(RichText::new(symbol).size(30.0).color(if is_human {
                    X_MARK
                } else {
                    TEXT_PRIMARY
                }));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.game_over.is_some() {
                        ("Game over", TEXT_MUTED)
                    } else if self.state.is_ai_thinking() {
                        ("Searching...", STATUS_BUSY)
                    } else if is_human {
                        ("Your turn", STATUS_OK)
                    } else {
                        ("AI to move", STATUS_BUSY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                        .size(12.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render the settings card. Changes apply at the next New Game.
    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SETTINGS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.checkbox(&mut self.pruning_enabled, "Alpha-beta pruning");
            ui.checkbox(&mut self.ai_first, "AI moves first");
            ui.add(
                egui::Slider::new(&mut self.depth_limit, 1..=6).text("Search depth"),
            );

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("New Game").clicked() {
                    self.new_game();
                }
                if ui.button("Undo").clicked() {
                    self.state.undo();
                }
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card with the last search's diagnostics
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(result) = self.state.last_ai_result {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("Score: {}", result.score))
                                .size(11.0)
                                .strong()
                                .color(STATUS_OK),
                        );
                        ui.label(
                            RichText::new(format!(
                                "→ ({}, {})",
                                result.best_move.row, result.best_move.col
                            ))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{} nodes", result.nodes))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                            ui.label(
                                RichText::new(format!(
                                    "{:.1}ms",
                                    result.elapsed.as_secs_f64() * 1000.0
                                ))
                                .size(10.0)
                                .color(TEXT_MUTED),
                            );
                        });
                    });
                });
            } else {
                ui.label(
                    RichText::new("No search yet")
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let (headline, detail) = match outcome {
            GameOutcome::Won {
                winner: Mark::X, ..
            } => ("YOU WIN", "four in a row"),
            GameOutcome::Won { .. } => ("AI WINS", "four in a row"),
            GameOutcome::Draw => ("DRAW", "board is full"),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(headline)
                            .size(20.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(10.0);
                    if ui.button("New Game").clicked() {
                        self.new_game();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
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
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = match self.state.game_over {
                Some(GameOutcome::Won { line, .. }) => Some(line),
                _ => None,
            };

            let input_enabled = self.state.is_human_turn() && !self.state.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.current_turn,
                self.state.last_move,
                winning_line,
                self.state.game_over.is_some(),
                input_enabled,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_mark(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.new_game();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Pick up a finished search
        self.state.check_ai_result();

        // Start AI thinking if needed
        if self.state.is_ai_turn()
            && !self.state.is_ai_thinking()
            && self.state.game_over.is_none()
        {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep repainting while the AI is thinking
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
