//! `scrollyplot [config.yaml]`: open the scrollytelling window.

use scrollyplot::{run_scrollyplot, ScrollyConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = match std::env::args_os().nth(1) {
        Some(path) => match ScrollyConfig::load(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => ScrollyConfig::default(),
    };

    if let Err(e) = run_scrollyplot(cfg, None) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
