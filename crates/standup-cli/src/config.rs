//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Deserializer, Serialize};

/// Application configuration.
///
/// Every field has a default, so an empty or missing config file is valid.
/// Text fields also accept bare numbers and booleans, since `STANDUP_*`
/// values such as `STANDUP_TEAM_NAME=2024` arrive typed by how they look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Title shown in the header bar.
    #[serde(deserialize_with = "text")]
    pub title: String,

    /// Label of the entry shown before anyone speaks.
    #[serde(deserialize_with = "text")]
    pub welcome_message: String,

    /// Banner text shown under the speaker list.
    #[serde(deserialize_with = "text")]
    pub team_name: String,

    /// Speakers who go first, in shuffled order.
    #[serde(deserialize_with = "text_list")]
    pub primary_speakers: Vec<String>,

    /// Speakers who go after the primary group, in shuffled order.
    #[serde(deserialize_with = "text_list")]
    pub secondary_speakers: Vec<String>,

    /// Final slot after everyone has spoken. Empty to omit it.
    #[serde(deserialize_with = "text")]
    pub trailer: String,

    /// Time of day (`HH:MM`) by which the meeting must be over.
    #[serde(deserialize_with = "text")]
    pub end_time: String,
}

/// A scalar that is read back as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Signed(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Scalar>::deserialize(deserializer)?;
    Ok(values.into_iter().map(String::from).collect())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Stand-up".to_string(),
            welcome_message: "Welcome!".to_string(),
            team_name: "ASDF".to_string(),
            primary_speakers: ["A", "B", "C", "F", "G"].map(String::from).to_vec(),
            secondary_speakers: ["X", "Z"].map(String::from).to_vec(),
            trailer: "Misc, QA".to_string(),
            end_time: "09:25".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    ///
    /// Later sources override earlier ones: defaults, then
    /// `<config_dir>/standup/config.toml`, then `config_path`, then `STANDUP_*`
    /// environment variables (e.g. `STANDUP_END_TIME=09:45`).
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("STANDUP_"));

        figment.extract()
    }

    /// The trailer, or `None` when it is blank.
    pub fn trailer(&self) -> Option<&str> {
        Some(self.trailer.as_str()).filter(|t| !t.trim().is_empty())
    }
}

/// Returns the platform-specific config directory for standup.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("standup"))
}

/// Returns the platform-specific state directory for standup.
///
/// On Linux: `~/.local/state/standup`
pub fn dirs_state_path() -> Option<PathBuf> {
    dirs::state_dir().map(|p| p.join("standup"))
}
