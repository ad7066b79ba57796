use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, bail};
use serde::Deserialize;

use super::learning_type::LearningType;

const BUILTIN_CATALOG: &str = include_str!("../../../assets/learning_types.json");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningProfile {
    pub badge_url: String,
    pub speciality: String,
    /// Keyed "1", "2", "3".
    pub suggestions: BTreeMap<String, String>,
}

/// Read-only lookup of badge, speciality and suggestions per learning type.
#[derive(Debug, Clone)]
pub struct LearningCatalog {
    profiles: HashMap<LearningType, LearningProfile>,
}

impl LearningCatalog {
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let entries: HashMap<String, LearningProfile> =
            serde_json::from_str(raw).context("learning type catalog is not valid JSON")?;
        let mut profiles = HashMap::with_capacity(entries.len());
        for (label, profile) in entries {
            let t: LearningType = label.parse()?;
            profiles.insert(t, profile);
        }
        for t in LearningType::ALL {
            if !profiles.contains_key(&t) {
                bail!("learning type catalog is missing `{t}`");
            }
        }
        Ok(Self { profiles })
    }

    pub fn profile(&self, learning_type: LearningType) -> Option<&LearningProfile> {
        self.profiles.get(&learning_type)
    }
}
