use std::process::ExitCode;

use tricolor_demo::DemoConfig;
use tricolor_engine::logging::{init_logging, LoggingConfig};

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match tricolor_demo::run(DemoConfig::default()) {
        Ok(status) => status.into(),
        Err(e) => {
            log::error!("initialization failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}
