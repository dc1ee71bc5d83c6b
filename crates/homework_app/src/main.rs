mod app;
mod config;
mod logging;

use std::process::ExitCode;

use bot_logging::bot_error;

use crate::config::{ConfigError, Credentials};

fn main() -> ExitCode {
    logging::initialize();

    let credentials = match credentials_or_exit(Credentials::from_env()) {
        Ok(credentials) => credentials,
        Err(code) => return code,
    };

    match app::run(credentials) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            bot_error!("Startup failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Missing credentials are fatal: log why and pick the failure exit code.
fn credentials_or_exit(loaded: Result<Credentials, ConfigError>) -> Result<Credentials, ExitCode> {
    loaded.map_err(|err| {
        bot_error!("{err}. Программа принудительно остановлена");
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PRACTICUM_TOKEN, TELEGRAM_CHAT_ID, TELEGRAM_TOKEN};

    #[test]
    fn missing_credentials_exit_with_failure() {
        bot_logging::initialize_for_tests();
        let loaded = Credentials::from_lookup(|key| {
            (key == TELEGRAM_TOKEN).then(|| "t".to_string())
        });

        assert_eq!(credentials_or_exit(loaded).unwrap_err(), ExitCode::FAILURE);
    }

    #[test]
    fn complete_credentials_continue_startup() {
        bot_logging::initialize_for_tests();
        let loaded = Credentials::from_lookup(|key| match key {
            PRACTICUM_TOKEN | TELEGRAM_TOKEN | TELEGRAM_CHAT_ID => Some(format!("{key}-value")),
            _ => None,
        });

        let credentials = credentials_or_exit(loaded).expect("startup continues");
        assert_eq!(credentials.telegram_chat_id, "TELEGRAM_CHAT_ID-value");
    }
}
