mod region_code;
mod phone_control_tests;
mod config_tests;

static ONCE: std::sync::Once = std::sync::Once::new();

pub(crate) fn init_logger() {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );
}
