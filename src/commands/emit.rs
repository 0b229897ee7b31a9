use eyre::Result;

use super::Wiring;
use crate::config::Config;
use crate::notify::Severity;

pub fn run(severity: Severity, words: &[String], config: &Config) -> Result<()> {
    let message = words.join(" ");
    log::debug!("Emitting {:?}: {}", severity, message);

    let wiring = Wiring::from_config(config);
    wiring.notifier.emit(severity, &message);

    Ok(())
}
