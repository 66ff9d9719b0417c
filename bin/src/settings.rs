use anyhow::{Context, Result};
use log::info;
use paradoxes_core::config::Settings;
use std::{fs, path::Path};

/// Defaults, overlaid with the JSON file at `path` when one is given.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read config file {}", path.display()))?;
    let settings = serde_json::from_str(&text)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    info!("loaded settings from {}", path.display());
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, path::PathBuf};

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("paradoxes-{}-{name}.json", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(load(None).unwrap(), Settings::default());
    }

    #[test]
    fn file_overrides_some_fields() {
        let path = write_config("partial", r#"{ "sticker": { "pack_size": 3 } }"#);
        let settings = load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(settings.sticker.pack_size, 3);
        assert_eq!(settings.sticker.places, 728);
        assert_eq!(settings.bagels, Default::default());
    }

    #[test]
    fn bad_files_are_reported() {
        let path = write_config("broken", "{ not json");
        let err = load(Some(&path)).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.to_string().contains("invalid config file"));

        let missing = env::temp_dir().join("paradoxes-does-not-exist.json");
        assert!(load(Some(&missing)).is_err());
    }
}
