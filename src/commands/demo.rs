use eyre::Result;

use super::Wiring;
use crate::config::Config;

pub const WARNING_MESSAGE: &str = "This is a warning message";
pub const ERROR_MESSAGE: &str = "This is an error message";
pub const FATAL_MESSAGE: &str = "This is a fatal error message";

/// Emit one message of each severity through the default wiring
pub fn run(config: &Config) -> Result<()> {
    let wiring = Wiring::from_config(config);

    wiring.notifier.warning(WARNING_MESSAGE);
    wiring.notifier.error(ERROR_MESSAGE);
    wiring.notifier.fatal_error(FATAL_MESSAGE);

    Ok(())
}
