#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate serde_derive;

#[macro_use]
mod log;

mod args;
mod auth;
mod config;
mod error;
mod util;

use std::process;

use crate::auth::AcceptAll;

fn main() {
    let args = args::args();
    if let Some(level) = args.level {
        log::log_init(level);
    } else if cfg!(debug_assertions) {
        log::log_init(log::LogLevel::Debug);
    } else {
        log::log_init(log::LogLevel::Info);
    }

    info!("Initializing");
    let config = config::load(args.config.as_deref());
    debug!("Using config: {:?}", config);

    let policy = AcceptAll;
    let mut failures = 0u64;
    for (index, file) in args.files.iter().enumerate() {
        match auth::authenticate(file, index as u64 + 1, &config, &policy) {
            Ok(true) => {}
            Ok(false) => failures += 1,
            Err(e) => {
                error!("[!] {}", e);
                for cause in e.iter().skip(1) {
                    error!("[!] caused by: {}", cause);
                }
                failures += 1;
            }
        }
    }

    if failures > 0 {
        error!("{} of {} files failed authentication", failures, args.files.len());
    }
    process::exit(if failures == 0 { 0 } else { 1 });
}
