use ehbo_trainer::ui::app::TrainerApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("EHBO Trainer")
            .with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "EHBO Trainer",
        options,
        Box::new(|cc| Ok(Box::new(TrainerApp::new(cc)))),
    )
}
