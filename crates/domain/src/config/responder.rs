use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResponderConfig {
    /// TTL stamped on every answer record. Answers are computed per query,
    /// so the default asks resolvers not to cache them.
    #[serde(default)]
    pub answer_ttl: u32,
}
