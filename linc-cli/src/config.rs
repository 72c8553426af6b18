//! `linc config` - show the configuration the server would start with

use anyhow::{Context, Result};
use linc_core::AppConfig;

/// Print the resolved configuration
pub fn run_config() -> Result<()> {
    let config = AppConfig::from_env().context("Invalid configuration")?;
    print!("{}", render(&config));
    Ok(())
}

/// `KEY=value` lines, with the password masked.
fn render(config: &AppConfig) -> String {
    let password = if config.store.password.is_empty() {
        "(empty)"
    } else {
        "********"
    };

    format!(
        "DB_HOST={}\nDB_PORT={}\nDB_USER={}\nDB_PASSWORD={}\nDB_NAME={}\nDB_MAX_CONNECTIONS={}\nPORT={}\nPUBLIC_DIR={}\n",
        config.store.host,
        config.store.port,
        config.store.user,
        password,
        config.store.database,
        config.store.max_connections,
        config.port,
        config.public_dir.display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_masked() {
        let mut config = AppConfig::default();
        config.store.password = "hunter2".into();

        let out = render(&config);
        assert!(out.contains("DB_PASSWORD=********"));
        assert!(!out.contains("hunter2"));
        assert!(out.contains("PORT=3000"));
    }

    #[test]
    fn empty_password_is_labelled() {
        let out = render(&AppConfig::default());
        assert!(out.contains("DB_PASSWORD=(empty)"));
        assert!(out.contains("DB_NAME=linc_project_topics"));
    }
}
