use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::sync::{Arc, Mutex};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for YamlConfigSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read config file: {}", err)),
            },
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(self.file_path.as_str(), content)
            .map_err(|e| format!("Failed to write config file: {}", e))
    }
}

/// Caching config access over an injected provider and serializer. A missing
/// config file yields the default config, which is validated and written back
/// so the user has a file to edit.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider: FileContentConfigProvider::new(file_path.to_string()),
            config_serializer: YamlConfigSerializer::new(),
        }
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let config = match self.config_content_provider.get_config_content()? {
            Some(content) => {
                let config: TConfig = self.config_serializer.deserialize(&content)?;
                config.validate()?;
                config
            }
            None => {
                let config = TConfig::default();
                config.validate()?;
                let content = self.config_serializer.serialize(&config)?;
                self.config_content_provider.set_config_content(&content)?;
                config
            }
        };

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: TConfig) -> Result<(), String> {
        config.validate()?;
        let content = self.config_serializer.serialize(&config)?;
        self.config_content_provider.set_config_content(&content)?;
        *self.config.lock().unwrap() = Some(config);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex as StdMutex;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        name: String,
        limit: u32,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                name: "default".to_string(),
                limit: 5,
            }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.limit == 0 {
                return Err("limit must be greater than 0".to_string());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryContentProvider {
        content: StdMutex<HashMap<&'static str, String>>,
    }

    impl ConfigContentProvider for MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.lock().unwrap().get("config").cloned())
        }
        fn set_config_content(&self, content: &str) -> Result<(), String> {
            self.content
                .lock()
                .unwrap()
                .insert("config", content.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_missing_config_yields_default_and_writes_it_back() {
        let provider = MemoryContentProvider::default();
        let manager = ConfigManager::new(provider, YamlConfigSerializer::new());

        let config: TestConfig = manager.get_config().unwrap();
        assert_eq!(config, TestConfig::default());

        // The default must have been persisted for the user to edit.
        let stored = manager
            .config_content_provider
            .get_config_content()
            .unwrap();
        assert!(stored.unwrap().contains("default"));
    }

    #[test]
    fn test_existing_config_is_parsed() {
        let provider = MemoryContentProvider::default();
        provider
            .set_config_content("name: custom\nlimit: 9\n")
            .unwrap();
        let manager = ConfigManager::new(provider, YamlConfigSerializer::new());

        let config: TestConfig = manager.get_config().unwrap();
        assert_eq!(config.name, "custom");
        assert_eq!(config.limit, 9);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let provider = MemoryContentProvider::default();
        provider
            .set_config_content("name: broken\nlimit: 0\n")
            .unwrap();
        let manager: ConfigManager<_, TestConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_set_config_validates_before_writing() {
        let provider = MemoryContentProvider::default();
        let manager = ConfigManager::new(provider, YamlConfigSerializer::new());

        let invalid = TestConfig {
            name: "x".to_string(),
            limit: 0,
        };
        assert!(manager.set_config(invalid).is_err());

        let valid = TestConfig {
            name: "x".to_string(),
            limit: 3,
        };
        manager.set_config(valid.clone()).unwrap();
        assert_eq!(manager.get_config().unwrap(), valid);
    }
}
