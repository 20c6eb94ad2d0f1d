pub mod advisor;
pub mod cards;
pub mod gameplay;
pub mod mccfr;

/// Default table-configuration constants used when a CLI binary doesn't
/// prompt the operator for overrides.
pub const DEFAULT_SMALL_BLIND: gameplay::Chips = 1;
pub const DEFAULT_BIG_BLIND: gameplay::Chips = 2;
pub const DEFAULT_DEPTH_CAP: usize = 200;

/// Initialize combined terminal + rotating file logging. Training runs are
/// long-lived background jobs; a persistent log alongside live terminal
/// output is worth the extra file handle.
#[cfg(feature = "cli")]
pub fn init_logging() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves forward")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{time}.log")).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
