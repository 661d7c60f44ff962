use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Caching settings store over a pluggable content provider and
/// serializer. The first read deserializes and validates; later reads
/// return the cached value. A provider with no content yields defaults.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.to_string()),
            YamlConfigSerializer::new(),
        )
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

        let config_data_result = self.config_content_provider.get_config_content()?;
        if let Some(config_data) = config_data_result {
            let config = self.config_serializer.deserialize(&config_data)?;

            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.config.lock().unwrap();
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameSettings;
    use crate::score::ScorePolicy;

    struct MemoryContentProvider {
        content: Mutex<Option<String>>,
    }

    impl MemoryContentProvider {
        fn new(content: Option<&str>) -> Self {
            Self {
                content: Mutex::new(content.map(str::to_string)),
            }
        }
    }

    impl ConfigContentProvider for MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.lock().unwrap().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.lock().unwrap() = Some(content.to_string());
            Ok(())
        }
    }

    fn create_manager(
        content: Option<&str>,
    ) -> ConfigManager<MemoryContentProvider, GameSettings, YamlConfigSerializer> {
        ConfigManager::new(
            MemoryContentProvider::new(content),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_yields_defaults() {
        let manager = create_manager(None);

        assert_eq!(manager.get_config().unwrap(), GameSettings::default());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let manager = create_manager(None);
        let settings = GameSettings {
            grid_size: 4,
            move_limit: 120,
            shuffle_min_steps: 30,
            shuffle_max_steps: 60,
            score_policy: ScorePolicy::penalizing(),
        };

        manager.set_config(&settings).unwrap();

        assert_eq!(manager.get_config().unwrap(), settings);
    }

    #[test]
    fn test_stored_content_is_parsed_and_validated() {
        let content = "
grid_size: 9
move_limit: 50
shuffle_min_steps: 50
shuffle_max_steps: 100
score_policy:
  per_move_delta: 10
  win_bonus_base: 1500
  win_bonus_decay_per_second: 5
  lose_penalty: 200
";
        let manager = create_manager(Some(content));

        let error = manager.get_config().unwrap_err();
        assert!(error.contains("Grid size"), "{}", error);
    }

    #[test]
    fn test_set_config_rejects_invalid_settings() {
        let manager = create_manager(None);
        let settings = GameSettings {
            move_limit: 0,
            ..GameSettings::default()
        };

        assert!(manager.set_config(&settings).is_err());
        assert_eq!(manager.get_config().unwrap(), GameSettings::default());
    }
}
