//! Tic-Tac-Toe AI GUI
//!
//! A graphical interface for playing 4x4 tic-tac-toe against the minimax
//! engine.

use tictactoe::ui::TicTacToeApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 660.0])
            .with_min_inner_size([700.0, 520.0])
            .with_title("Tic-Tac-Toe 4x4"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )
}
