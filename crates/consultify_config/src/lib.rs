use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
pub mod models;
pub use models::*;

pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "CONSULTIFY".to_string());

    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);

    tracing::debug!(
        "loading config from {} and {} (env prefix {})",
        default_path.display(),
        env_path.display(),
        prefix
    );

    let builder = Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)?
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(raw_config)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// This function checks if the dotenv file has already been loaded using a `OnceCell`.
/// If not, it loads the file named by `DOTENV_OVERRIDE`, falling back to ".env".
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path =
        std::env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_config() {
        let toml = r#"
            use_bookings = true
            use_contact = true
            use_admin = true

            [server]
            host = "0.0.0.0"
            port = 9090

            [database]
            url = "sqlite:data/consultify.db"

            [scheduling]
            work_start_hour = 9
            work_end_hour = 17
            slot_duration_minutes = 30
            working_days = ["Mon", "Tue", "Wed", "Thu", "Fri"]

            [admin]
            session_ttl_minutes = 30
        "#;

        let config: AppConfig = Config::builder()
            .add_source(File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9090);
        assert!(config.use_bookings);
        assert_eq!(
            config.database.as_ref().unwrap().url,
            "sqlite:data/consultify.db"
        );
        let scheduling = config.scheduling.unwrap();
        assert_eq!(scheduling.work_start_hour, Some(9));
        assert_eq!(scheduling.working_days.unwrap().len(), 5);
        assert_eq!(config.admin.unwrap().session_ttl_minutes, Some(30));
    }

    #[test]
    fn flags_default_to_false() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 8080
        "#;

        let config: AppConfig = Config::builder()
            .add_source(File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(!config.use_bookings);
        assert!(!config.use_contact);
        assert!(!config.use_admin);
        assert!(config.database.is_none());
        assert!(config.scheduling.is_none());
        assert!(config.admin.is_none());
    }
}
