use serde::{Deserialize, Serialize};
use thinktank_core::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

const CONFIG_FILE: &str = "thinktank_config.yaml";

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(CONFIG_FILE)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the persisted notes, journal, and stats files.
    pub data_dir: String,
    /// Name shown in the dashboard greeting.
    pub display_name: String,
    pub puzzle_board_size: usize,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.data_dir.trim().is_empty() {
            return Err("data_dir must not be empty".to_string());
        }
        if self.display_name.trim().is_empty() {
            return Err("display_name must not be empty".to_string());
        }
        thinktank_core::games::sliding_puzzle::validate_board_size(self.puzzle_board_size)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: "thinktank_data".to_string(),
            display_name: "friend".to_string(),
            puzzle_board_size: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thinktank_core::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand_suffix();
        path.push(format!("temp_thinktank_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    fn rand_suffix() -> u32 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .subsec_nanos()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_blank_fields_and_bad_board_size() {
        let mut config = Config::default();
        config.data_dir = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.display_name = String::new();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.puzzle_board_size = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let serializer = YamlConfigSerializer::new();
        let config = Config {
            data_dir: "/tmp/tt".to_string(),
            display_name: "Vedant".to_string(),
            puzzle_board_size: 4,
        };
        let content = serializer.serialize(&config).unwrap();
        let parsed: Config = serializer.deserialize(&content).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_manager_creates_default_file_on_first_use() {
        let path = get_temp_file_path();
        let manager: ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> =
            ConfigManager::from_yaml_file(&path);

        let config = manager.get_config().unwrap();
        assert_eq!(config, Config::default());

        let provider = FileContentConfigProvider::new(path.clone());
        assert!(provider.get_config_content().unwrap().is_some());
        std::fs::remove_file(&path).unwrap();
    }
}
