use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use shared::configuration::DEFAULT_TABLE_NAME;
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SeedConfig {
    pub table_name: String,
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
    pub wait_delay_secs: u64,
    pub wait_max_attempts: u32,
}

impl Default for SeedConfig {
    // Delay and attempts mirror the stock DynamoDB `table_exists` waiter.
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            read_capacity_units: 10,
            write_capacity_units: 10,
            wait_delay_secs: 20,
            wait_max_attempts: 25,
        }
    }
}

impl SeedConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(SeedConfig::default()))
            .merge(Env::raw().only(&["TABLE_NAME"]))
            .merge(Env::prefixed("SEED_"))
            .extract()
    }

    pub fn wait_delay(&self) -> Duration {
        Duration::from_secs(self.wait_delay_secs)
    }
}
