use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TABLE_NAME: &str = "Movies";

#[derive(Debug, Serialize, Deserialize)]
pub struct Configuration {
    pub table_name: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
        }
    }
}

impl Configuration {
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Configuration::default()))
            // .merge fills in any missing values from the environment
            .merge(Env::raw().only(&["TABLE_NAME"]))
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration {{ table_name: {} }}", self.table_name)
    }
}
