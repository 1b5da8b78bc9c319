//! Configuration for docket
//!
//! Configuration lives in `docket.toml` at the store root. All ranking
//! weights are overridable so deployments can tune relevance without a
//! rebuild, but the defaults are the canonical values every deployment
//! of the same corpus must share for rankings to agree.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DocketError, Result};

/// Config file name, resolved relative to the store root
pub const CONFIG_FILE: &str = "docket.toml";

/// Top-level docket configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocketConfig {
    /// Relevance ranking weights
    #[serde(default)]
    pub ranking: RankingConfig,
}

/// Weights for the relevance ranking engine.
///
/// `text_weight` and `tag_weight` scale the two query-driven factors;
/// recency is a small additive bonus on top, not normalized against
/// them. `text_normalizer` is a fixed divisor applied to the weighted
/// field sum regardless of how many fields are populated; changing it
/// changes relevance ordering for existing corpora.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Weight applied to the text similarity factor
    pub text_weight: f64,
    /// Weight applied to the tag IoU factor
    pub tag_weight: f64,
    /// Maximum recency bonus, earned by a post published today
    pub recency_max: f64,
    /// Rolling window in days over which recency decays to zero
    pub recency_window_days: f64,
    /// Field multiplier for title matches
    pub title_boost: f64,
    /// Field multiplier for summary matches
    pub summary_boost: f64,
    /// Field multiplier for content matches
    pub content_boost: f64,
    /// Field multiplier for author matches
    pub author_boost: f64,
    /// Field multiplier for jurisdiction matches
    pub jurisdiction_boost: f64,
    /// Fixed divisor for the weighted field sum
    pub text_normalizer: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            text_weight: 30.0,
            tag_weight: 70.0,
            recency_max: 5.0,
            recency_window_days: 90.0,
            title_boost: 1.5,
            summary_boost: 1.0,
            content_boost: 0.8,
            author_boost: 0.7,
            jurisdiction_boost: 0.6,
            text_normalizer: 3.0,
        }
    }
}

impl DocketConfig {
    /// Load configuration from `docket.toml` under the store root.
    /// A missing file yields the defaults; a malformed file is a data error.
    pub fn load(store_root: &Path) -> Result<Self> {
        let path = store_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|e| DocketError::InvalidConfig {
            path,
            reason: e.to_string(),
        })
    }
}
