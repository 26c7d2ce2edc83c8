// file: src/config/node.rs
// version: 1.1.0
// guid: 8d1e4f27-6a3b-4c59-b0e2-71f5a9c3d846

//! Node attribute structures consumed by the command builder and install plan

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Environment a node belongs to when none is configured
pub const DEFAULT_ENVIRONMENT: &str = "_default";

fn default_environment() -> String {
    DEFAULT_ENVIRONMENT.to_string()
}

/// Attributes of the node the agent runs on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Identifying name of the host, substituted for `%{name}`
    #[serde(default)]
    pub name: String,
    /// Active environment, used for key lookup and `%{chef_environment}`
    #[serde(default = "default_environment")]
    pub chef_environment: String,
    /// Scout agent settings
    #[serde(default)]
    pub scout: ScoutAttributes,
}

/// Scout agent settings for a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutAttributes {
    /// Account key, either shared or per environment
    #[serde(default)]
    pub key: Option<KeySetting>,
    /// Display name template
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_prefix: Option<String>,
    #[serde(default)]
    pub name_suffix: Option<String>,
    /// Extra `--option 'value'` arguments, rendered in insertion order
    #[serde(default)]
    pub options: IndexMap<String, String>,
    /// Set when the agent lives in an rvm ruby
    #[serde(default)]
    pub rvm_ruby: Option<RubyFlag>,
    /// Older spelling of `rvm_ruby`; `rvm_ruby` wins when both are set
    #[serde(default)]
    pub rvm_ruby_string: Option<RubyFlag>,
    /// Ruby version for rbenv installs
    #[serde(default)]
    pub rbenv_ruby_string: Option<String>,
    /// Version of the scout gem; latest when absent
    #[serde(default)]
    pub version: Option<String>,
    /// Companion gems and their optional pinned versions
    #[serde(default)]
    pub gem_packages: IndexMap<String, Option<String>>,
}

/// The `key` attribute: one value for every environment or one per environment
///
/// Numeric scalars are read as their text, so `key: 1234567890` works.
/// `Debug` output never shows the key values.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum KeySetting {
    Scalar(String),
    PerEnvironment(IndexMap<String, Option<String>>),
}

impl KeySetting {
    /// Resolve the key for an environment, ignoring empty values
    pub fn resolve(&self, environment: &str) -> Option<&str> {
        let value = match self {
            KeySetting::Scalar(key) => Some(key.as_str()),
            KeySetting::PerEnvironment(keys) => keys.get(environment).and_then(|k| k.as_deref()),
        };
        value.filter(|k| !k.is_empty())
    }
}

impl fmt::Debug for KeySetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySetting::Scalar(_) => f.debug_tuple("Scalar").field(&"<redacted>").finish(),
            KeySetting::PerEnvironment(keys) => f
                .debug_map()
                .entries(
                    keys.iter()
                        .map(|(environment, key)| (environment, key.as_ref().map(|_| "<redacted>"))),
                )
                .finish(),
        }
    }
}

impl<'de> Deserialize<'de> for KeySetting {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeySettingVisitor;

        impl<'v> Visitor<'v> for KeySettingVisitor {
            type Value = KeySetting;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a key or a map of environment names to keys")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(KeySetting::Scalar(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
                Ok(KeySetting::Scalar(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(KeySetting::Scalar(value.to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(KeySetting::Scalar(value.to_string()))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                Ok(KeySetting::Scalar(value.to_string()))
            }

            fn visit_map<A: MapAccess<'v>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut keys = IndexMap::new();
                while let Some((environment, key)) = map.next_entry::<String, Option<ScalarText>>()? {
                    keys.insert(environment, key.map(|k| k.0));
                }
                Ok(KeySetting::PerEnvironment(keys))
            }
        }

        deserializer.deserialize_any(KeySettingVisitor)
    }
}

/// The rvm flag: a plain switch or the rvm ruby string itself
///
/// Numeric scalars such as `rvm_ruby: 3.1` are read as ruby strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RubyFlag {
    Enabled(bool),
    Ruby(String),
}

impl RubyFlag {
    pub fn is_enabled(&self) -> bool {
        match self {
            RubyFlag::Enabled(enabled) => *enabled,
            RubyFlag::Ruby(ruby) => !ruby.is_empty(),
        }
    }

    /// The ruby string to target, when one was given
    pub fn ruby_string(&self) -> Option<&str> {
        match self {
            RubyFlag::Ruby(ruby) if !ruby.is_empty() => Some(ruby),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for RubyFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RubyFlagVisitor;

        impl Visitor<'_> for RubyFlagVisitor {
            type Value = RubyFlag;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a boolean or a ruby string")
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
                Ok(RubyFlag::Enabled(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(RubyFlag::Ruby(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(RubyFlag::Ruby(value.to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(RubyFlag::Ruby(value.to_string()))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                Ok(RubyFlag::Ruby(value.to_string()))
            }
        }

        deserializer.deserialize_any(RubyFlagVisitor)
    }
}

/// A string scalar that also accepts numbers
struct ScalarText(String);

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarTextVisitor;

        impl Visitor<'_> for ScalarTextVisitor {
            type Value = ScalarText;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string or a number")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(ScalarText(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(ScalarText(value.to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(ScalarText(value.to_string()))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                Ok(ScalarText(value.to_string()))
            }
        }

        deserializer.deserialize_any(ScalarTextVisitor)
    }
}

impl Default for NodeAttributes {
    fn default() -> Self {
        Self {
            name: String::new(),
            chef_environment: default_environment(),
            scout: ScoutAttributes::default(),
        }
    }
}

impl NodeAttributes {
    /// Create attributes for a named node in an environment
    pub fn new(name: impl Into<String>, chef_environment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chef_environment: chef_environment.into(),
            scout: ScoutAttributes::default(),
        }
    }

    /// Replace the scout settings
    pub fn with_scout(mut self, scout: ScoutAttributes) -> Self {
        self.scout = scout;
        self
    }
}

impl ScoutAttributes {
    /// The rvm flag under either spelling, `rvm_ruby` first
    pub fn rvm_flag(&self) -> Option<&RubyFlag> {
        self.rvm_ruby.as_ref().or(self.rvm_ruby_string.as_ref())
    }

    /// True when the agent is installed under rvm
    pub fn uses_rvm(&self) -> bool {
        self.rvm_flag().is_some_and(RubyFlag::is_enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_scout_section_missing() {
        let node: NodeAttributes = serde_yaml::from_str("name: web-1\n").unwrap();
        assert_eq!(node.chef_environment, DEFAULT_ENVIRONMENT);
        assert_eq!(node.scout, ScoutAttributes::default());
    }

    #[test]
    fn test_scalar_key() {
        let scout: ScoutAttributes = serde_yaml::from_str("key: abc123\n").unwrap();
        let key = scout.key.unwrap();
        assert_eq!(key, KeySetting::Scalar("abc123".to_string()));
        assert_eq!(key.resolve("anything"), Some("abc123"));
    }

    #[test]
    fn test_per_environment_key() {
        let yaml = "key:\n  production: prod-key\n  staging: ~\n";
        let scout: ScoutAttributes = serde_yaml::from_str(yaml).unwrap();
        let key = scout.key.unwrap();
        assert_eq!(key.resolve("production"), Some("prod-key"));
        assert_eq!(key.resolve("staging"), None);
        assert_eq!(key.resolve("_default"), None);
    }

    #[test]
    fn test_empty_key_does_not_resolve() {
        assert_eq!(KeySetting::Scalar(String::new()).resolve("_default"), None);
    }

    #[test]
    fn test_options_keep_file_order() {
        let yaml = "options:\n  server: http://scout.example.com/\n  level: debug\n  http-proxy: http://proxy.example.com/\n";
        let scout: ScoutAttributes = serde_yaml::from_str(yaml).unwrap();
        let keys: Vec<&str> = scout.options.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["server", "level", "http-proxy"]);
    }

    #[test]
    fn test_ruby_flag_truthiness() {
        assert!(RubyFlag::Enabled(true).is_enabled());
        assert!(!RubyFlag::Enabled(false).is_enabled());
        assert!(RubyFlag::Ruby("ruby-1.9.2-p318@scout".to_string()).is_enabled());
        assert!(!RubyFlag::Ruby(String::new()).is_enabled());
        assert_eq!(RubyFlag::Enabled(true).ruby_string(), None);
    }

    #[test]
    fn test_rvm_ruby_string_spelling() {
        let scout: ScoutAttributes =
            serde_yaml::from_str("rvm_ruby_string: ruby-1.9.2-p318@scout\n").unwrap();
        assert!(scout.uses_rvm());
        assert_eq!(
            scout.rvm_flag().and_then(RubyFlag::ruby_string),
            Some("ruby-1.9.2-p318@scout")
        );
    }

    #[test]
    fn test_both_rvm_spellings_prefer_rvm_ruby() {
        let yaml = "rvm_ruby: ruby-2.7.8@scout\nrvm_ruby_string: ruby-1.9.2-p318@scout\n";
        let scout: ScoutAttributes = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            scout.rvm_flag().and_then(RubyFlag::ruby_string),
            Some("ruby-2.7.8@scout")
        );

        let disabled = "rvm_ruby: false\nrvm_ruby_string: ruby-1.9.2-p318@scout\n";
        let scout: ScoutAttributes = serde_yaml::from_str(disabled).unwrap();
        assert!(!scout.uses_rvm());
    }

    #[test]
    fn test_numeric_key_and_ruby_are_text() {
        let yaml = "key: 1234567890\nrvm_ruby: 3.1\n";
        let scout: ScoutAttributes = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scout.key, Some(KeySetting::Scalar("1234567890".to_string())));
        assert_eq!(scout.rvm_ruby, Some(RubyFlag::Ruby("3.1".to_string())));

        let json: ScoutAttributes =
            serde_json::from_str(r#"{"key": {"production": 42, "staging": null}}"#).unwrap();
        let key = json.key.unwrap();
        assert_eq!(key.resolve("production"), Some("42"));
        assert_eq!(key.resolve("staging"), None);
    }

    #[test]
    fn test_key_rejects_other_shapes() {
        let err = serde_yaml::from_str::<ScoutAttributes>("key: [a, b]\n").unwrap_err();
        assert!(err.to_string().contains("a key or a map of environment names to keys"));
    }

    #[test]
    fn test_debug_output_hides_keys() {
        let mut keys = IndexMap::new();
        keys.insert("production".to_string(), Some("prod-secret".to_string()));
        keys.insert("staging".to_string(), None);
        let node = NodeAttributes::default().with_scout(ScoutAttributes {
            key: Some(KeySetting::PerEnvironment(keys)),
            ..Default::default()
        });

        let debug = format!("{:?}", node);
        assert!(!debug.contains("prod-secret"));
        assert!(debug.contains("production"));
        assert!(!format!("{:?}", KeySetting::Scalar("shared-secret".to_string())).contains("shared-secret"));
    }

    #[test]
    fn test_gem_packages_with_and_without_versions() {
        let yaml = "gem_packages:\n  scout_api: \"1.2.0\"\n  mysql: ~\n  redis: \"\"\n";
        let scout: ScoutAttributes = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scout.gem_packages["scout_api"].as_deref(), Some("1.2.0"));
        assert_eq!(scout.gem_packages["mysql"], None);
        assert_eq!(scout.gem_packages["redis"].as_deref(), Some(""));
    }
}
