pub mod cards;
pub mod evaluation;
pub mod gameplay;
pub mod simulation;

/// expected return per unit wagered
pub type Payout = f64;

/// random instance generation for tests, benches, and Monte Carlo sampling
pub trait Arbitrary {
    fn random() -> Self;
}

/// initialize terminal logging.
/// silences location/target/thread fields, INFO and up.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
