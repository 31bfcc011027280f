use crate::commands::{CmdMessage, CmdResult, SolidPaths};
use crate::config::{unknown_key, SolidConfig};
use crate::error::Result;
use tracing::info;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &SolidPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = SolidConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = SolidConfig::load(dir)?;
            let val = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(val));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = SolidConfig::load(dir)?;
            config.set(&key, &value)?;
            config.save(dir)?;
            info!(key = %key, value = %value, dir = %dir.display(), "config updated");

            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolidError;

    fn temp_paths() -> (tempfile::TempDir, SolidPaths) {
        let dir = tempfile::tempdir().unwrap();
        let paths = SolidPaths::new(dir.path().join("solidkit"));
        (dir, paths)
    }

    #[test]
    fn show_all_returns_defaults_without_a_file() {
        let (_dir, paths) = temp_paths();
        let result = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(SolidConfig::default()));
    }

    #[test]
    fn set_persists_and_reports() {
        let (_dir, paths) = temp_paths();
        let result = run(
            &paths,
            ConfigAction::Set("indent-size".into(), "4".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "indent-size set to 4");

        let loaded = SolidConfig::load(&paths.config_dir).unwrap();
        assert_eq!(loaded.indent_size, 4);
    }

    #[test]
    fn show_key_reads_back_the_value() {
        let (_dir, paths) = temp_paths();
        run(&paths, ConfigAction::Set("line-ending".into(), "CRLF".into())).unwrap();
        let result = run(&paths, ConfigAction::ShowKey("line-ending".into())).unwrap();
        assert_eq!(result.messages[0].content, "crlf");
    }

    #[test]
    fn show_unknown_key_is_an_invalid_argument() {
        let (_dir, paths) = temp_paths();
        let err = run(&paths, ConfigAction::ShowKey("colour".into())).unwrap_err();
        assert!(matches!(err, SolidError::InvalidArgument(_)));
        assert!(err.to_string().contains("Unknown config key: colour"));
    }

    #[test]
    fn set_with_bad_value_fails_and_writes_nothing() {
        let (_dir, paths) = temp_paths();
        let err = run(&paths, ConfigAction::Set("indent-size".into(), "0".into())).unwrap_err();
        assert!(matches!(err, SolidError::InvalidArgument(_)));
        assert!(!paths.config_dir.join("config.json").exists());
    }
}
