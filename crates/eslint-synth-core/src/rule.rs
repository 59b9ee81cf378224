//! Rule settings as the linter's configuration schema expects them.
//!
//! A rule is either a bare severity (`"warn"`) or a severity followed by
//! its options (`["warn", { "code": 150 }]`). Rule sets combine with
//! last-write-wins semantics.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Severity level of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule is disabled.
    Off,
    /// Violations are reported as warnings.
    Warn,
    /// Violations are reported as errors.
    Error,
}

impl Severity {
    /// Returns the keyword the linter uses for this severity.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Maps the numeric form (`0`, `1`, `2`) to a severity.
    #[must_use]
    pub fn from_level(level: u64) -> Option<Self> {
        match level {
            0 => Some(Self::Off),
            1 => Some(Self::Warn),
            2 => Some(Self::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity keyword is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity `{0}` (expected off, warn or error)")]
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ParseSeverityError(other.to_string())),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeverityRepr {
    Name(String),
    Level(u64),
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match SeverityRepr::deserialize(deserializer)? {
            SeverityRepr::Name(name) => name.parse().map_err(de::Error::custom),
            SeverityRepr::Level(level) => Self::from_level(level)
                .ok_or_else(|| de::Error::custom(format!("invalid severity level {level}"))),
        }
    }
}

/// Setting for a single rule.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleSetting {
    /// Severity only.
    Level(Severity),
    /// Severity followed by rule options.
    Configured {
        /// Severity of the rule.
        severity: Severity,
        /// Options passed to the rule, in order.
        options: Vec<Value>,
    },
}

impl RuleSetting {
    /// Disabled rule.
    #[must_use]
    pub fn off() -> Self {
        Self::Level(Severity::Off)
    }

    /// Rule reported as a warning, with default options.
    #[must_use]
    pub fn warn() -> Self {
        Self::Level(Severity::Warn)
    }

    /// Rule reported as an error, with default options.
    #[must_use]
    pub fn error() -> Self {
        Self::Level(Severity::Error)
    }

    /// Rule with explicit options.
    ///
    /// An empty option list collapses to [`RuleSetting::Level`].
    #[must_use]
    pub fn with_options(severity: Severity, options: impl IntoIterator<Item = Value>) -> Self {
        let options: Vec<Value> = options.into_iter().collect();
        if options.is_empty() {
            Self::Level(severity)
        } else {
            Self::Configured { severity, options }
        }
    }

    /// Returns the severity of this setting.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::Level(severity) | Self::Configured { severity, .. } => *severity,
        }
    }

    /// Returns the rule options (empty for a bare severity).
    #[must_use]
    pub fn options(&self) -> &[Value] {
        match self {
            Self::Level(_) => &[],
            Self::Configured { options, .. } => options,
        }
    }

    /// Returns `true` unless the rule is turned off.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.severity() != Severity::Off
    }
}

impl From<Severity> for RuleSetting {
    fn from(severity: Severity) -> Self {
        Self::Level(severity)
    }
}

impl std::fmt::Display for RuleSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Level(severity) => write!(f, "{severity}"),
            Self::Configured { severity, options } => {
                write!(f, "{severity}")?;
                for option in options {
                    write!(f, " {option}")?;
                }
                Ok(())
            }
        }
    }
}

impl Serialize for RuleSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Level(severity) => severity.serialize(serializer),
            Self::Configured { severity, options } => {
                let mut seq = serializer.serialize_seq(Some(options.len() + 1))?;
                seq.serialize_element(severity)?;
                for option in options {
                    seq.serialize_element(option)?;
                }
                seq.end()
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RuleSettingRepr {
    Level(Severity),
    List(Vec<Value>),
}

impl<'de> Deserialize<'de> for RuleSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RuleSettingRepr::deserialize(deserializer)? {
            RuleSettingRepr::Level(severity) => Ok(Self::Level(severity)),
            RuleSettingRepr::List(mut items) => {
                if items.is_empty() {
                    return Err(de::Error::custom("rule setting list must start with a severity"));
                }
                let options = items.split_off(1);
                let head = items.remove(0);
                let severity = Severity::deserialize(head).map_err(de::Error::custom)?;
                Ok(Self::with_options(severity, options))
            }
        }
    }
}

/// Mapping from rule identifier to its setting.
///
/// Entries are kept sorted by rule name so that serialized output does not
/// depend on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet(BTreeMap<String, RuleSetting>);

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a rule, returning the setting it replaced.
    pub fn set(&mut self, rule: impl Into<String>, setting: RuleSetting) -> Option<RuleSetting> {
        self.0.insert(rule.into(), setting)
    }

    /// Builder-style variant of [`RuleSet::set`].
    #[must_use]
    pub fn with(mut self, rule: impl Into<String>, setting: RuleSetting) -> Self {
        self.set(rule, setting);
        self
    }

    /// Returns the setting for a rule.
    #[must_use]
    pub fn get(&self, rule: &str) -> Option<&RuleSetting> {
        self.0.get(rule)
    }

    /// Returns `true` if the rule has a setting.
    #[must_use]
    pub fn contains(&self, rule: &str) -> bool {
        self.0.contains_key(rule)
    }

    /// Number of configured rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no rule is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates rules in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSetting)> {
        self.0.iter().map(|(name, setting)| (name.as_str(), setting))
    }

    /// Layers `overlay` on top of `self`; overlay entries win on collision.
    pub fn merge(&mut self, overlay: &RuleSet) {
        for (rule, setting) in &overlay.0 {
            self.0.insert(rule.clone(), setting.clone());
        }
    }

    /// Consuming variant of [`RuleSet::merge`].
    #[must_use]
    pub fn merged(mut self, overlay: &RuleSet) -> Self {
        self.merge(overlay);
        self
    }
}

impl<K: Into<String>> FromIterator<(K, RuleSetting)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (K, RuleSetting)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(rule, setting)| (rule.into(), setting))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = (&'a String, &'a RuleSetting);
    type IntoIter = std::collections::btree_map::Iter<'a, String, RuleSetting>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
