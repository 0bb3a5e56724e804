use serde::de::DeserializeOwned;

use super::*;
use crate::ast::Dictionary;

impl Config {
    /// Get a typed value using dot notation into dictionaries.
    ///
    /// # Examples
    /// ```no_run
    /// # use cfgxml::Config;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = Config::from_file("settings.cfg")?;
    /// let family: String = config.get("user_settings.appearance.font.family")?;
    /// let size: u16 = config.get("user_settings.appearance.font.size")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if path doesn't exist or value can't be converted to type T.
    pub fn get<T>(&self, path: &str) -> Result<T, ConfigError>
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value).map_err(|e| self.enhance_error_with_line_info(e, path))
    }

    /// Get an optional typed value - returns `None` if the path doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, ConfigError>
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        match self.get_value(path) {
            Ok(value) => Ok(Some(
                T::try_from(value).map_err(|e| self.enhance_error_with_line_info(e, path))?,
            )),
            Err(ConfigError::MissingKey { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use cfgxml::Config;
    /// # let config = Config::from_file("settings.cfg").unwrap();
    /// let timeout = config.get_or("server.timeout", 30u64);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value`.
    ///
    /// The first path segment names a top-level constant (its latest
    /// assignment), later segments walk dictionary keys. An empty path
    /// returns every constant as one dictionary.
    pub fn get_value(&self, path: &str) -> Result<Value, ConfigError> {
        if path.trim().is_empty() {
            return Ok(Value::Dictionary(self.root()));
        }
        self.lookup(path).cloned()
    }

    /// Get all keys of the dictionary at `path`.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, ConfigError> {
        match self.get_value(path)? {
            Value::Dictionary(entries) => Ok(entries.keys().cloned().collect()),
            other => Err(ConfigError::TypeError {
                message: format!("Path '{}' is {}, not a dictionary", path, other.type_name()),
                hint: Some("Only dictionaries have keys".into()),
                code: Some(306),
            }),
        }
    }

    /// Check if a configuration path exists.
    pub fn has(&self, path: &str) -> bool {
        self.lookup(path).is_ok()
    }

    /// Deserialize the whole config into `T` through its JSON shape.
    ///
    /// # Examples
    /// ```ignore
    /// #[derive(serde::Deserialize)]
    /// struct Settings { version: i64, default_theme: String }
    ///
    /// let settings: Settings = config.deserialize()?;
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        let json = serde_json::to_value(self.root()).map_err(deserialize_error)?;
        serde_json::from_value(json).map_err(deserialize_error)
    }

    /// Top-level constants as one dictionary. A redefined constant keeps its
    /// first position and its last value.
    fn root(&self) -> Dictionary {
        let mut root = Dictionary::new();
        for assignment in self.document.iter() {
            root.insert(assignment.name.clone(), assignment.value.clone());
        }
        root
    }

    fn lookup(&self, path: &str) -> Result<&Value, ConfigError> {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or_default();

        let mut current = self.document.get(first).ok_or_else(|| ConfigError::MissingKey {
            path: path.to_string(),
            hint: Some(format!("No constant named '{}' is defined", first)),
            code: Some(304),
        })?;

        for seg in segments {
            current = match current {
                Value::Dictionary(entries) => entries.get(seg),
                _ => None,
            }
            .ok_or_else(|| ConfigError::MissingKey {
                path: path.to_string(),
                hint: Some(format!("'{}' is not a key at this level", seg)),
                code: Some(304),
            })?;
        }

        Ok(current)
    }

    /// Points type errors at the line that assigned the top-level constant.
    fn enhance_error_with_line_info(&self, e: ConfigError, path: &str) -> ConfigError {
        let root = path.split('.').next().unwrap_or_default();
        match (e, self.find_assignment_line(root)) {
            (ConfigError::TypeError { message, hint, code }, Some(line)) => ConfigError::TypeError {
                message: format!("{} (at `{}`, assigned on line {})", message, path, line),
                hint,
                code,
            },
            (other, _) => other,
        }
    }
}

fn deserialize_error(e: serde_json::Error) -> ConfigError {
    ConfigError::TypeError {
        message: format!("Failed to deserialize config: {}", e),
        hint: Some("Check that the target type matches the config's constants".into()),
        code: Some(405),
    }
}
