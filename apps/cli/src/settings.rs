//! Layered settings: defaults, then a TOML file, then `VIGIL_` variables.
//!
//! ```toml
//! request_id_length = 36
//!
//! [query]
//! asc = "_asc"
//!
//! [allowed]
//! fields = ["name", "type"]
//! sort = ["_id"]
//! ```
//!
//! Nested keys are set from the environment with a double underscore, e.g.
//! `VIGIL_QUERY__LIMIT=_limit`.

use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use vigil_params::ParamsConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(flatten)]
    pub params: ParamsConfig,
    pub allowed: Allowed,
}

/// Values `check` accepts for projections and sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Allowed {
    pub fields: Vec<String>,
    pub sort: Vec<String>,
}

impl Settings {
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            anyhow::ensure!(path.is_file(), "config file {} not found", path.display());
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed("VIGIL_").ignore(&["log", "config"]).split("__"));

        let settings: Self = figment.extract().context("failed to load settings")?;
        settings
            .params
            .validate()
            .context("invalid parameter settings")?;

        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }
}
