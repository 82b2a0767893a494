mod capabilities;
mod cli;
mod command_handlers;
mod config;
mod error;
mod logging;
mod platform;

use std::ffi::OsString;
use std::io::{self, Write};

use crate::capabilities::{Capabilities, LocalFs, ReqwestClient, SystemRunner};
use crate::config::Config;

fn main() {
    let code = run();
    std::process::exit(code);
}

/// Start-up problems never stop a command from running: a broken config or
/// log filter is reported and defaults are used instead.
fn run() -> i32 {
    let (cfg, cfg_err) = match Config::load() {
        Ok(cfg) => (cfg, None),
        Err(e) => (Config::default(), Some(e)),
    };
    if let Err(e) = logging::init(cfg.log.filter.as_deref()) {
        eprintln!("Warning: {e:#}");
    }
    if let Some(e) = cfg_err {
        tracing::warn!("ignoring config: {e:#}");
    }

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let http = ReqwestClient::new(cfg.http);
    let caps = Capabilities {
        fs: &LocalFs,
        http: &http,
        process: &SystemRunner,
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let code = command_handlers::dispatch::dispatch(&args, &caps, &mut out, &mut err);
    // process::exit skips destructors, so nothing may stay buffered
    let _ = out.flush();
    code
}
