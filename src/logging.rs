// Wed Aug 26 2026 - Alex

use log::LevelFilter;

pub fn init(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .format_timestamp(None)
        .init();
}

pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}
