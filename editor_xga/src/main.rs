mod app;
mod config;
mod filemanager;
mod keymap;

use std::process::ExitCode;

use app::XgaEditor;
use config::EditorConfig;

fn main() -> ExitCode {
    lib_xga::init_logging();

    let config = match EditorConfig::from_prompts() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(1);
        }
    };

    let app = match XgaEditor::new(config) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(1);
        }
    };

    let native_options = eframe::NativeOptions::default();
    if let Err(err) = eframe::run_native(
        "XGA Painter",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    ) {
        eprintln!("{err}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
