use serde::{Deserialize, Serialize};

use crate::theory::{KeyName, Letter, ScaleType};

/// Persistable configuration of a key context.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSettings {
    pub key: KeyName,
}
impl ContextSettings {
    pub fn new(key: KeyName) -> Self {
        Self { key }
    }
}
impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            key: KeyName::new(Letter::C, None, ScaleType::Major),
        }
    }
}
