use log::LevelFilter;

/// Installs the platform logger. Safe to call more than once.
pub fn init(tag: &str) {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag(tag),
    );

    #[cfg(not(target_os = "android"))]
    {
        let _ = tag;
        let _ = env_logger::Builder::new()
            .filter_level(LevelFilter::Info)
            .parse_default_env()
            .try_init();
    }
}
