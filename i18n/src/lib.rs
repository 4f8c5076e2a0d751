use serde::{Deserialize, Serialize};

pub mod en_us;
pub mod zh_cn;

/// language type
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageType {
    #[default]
    ZhCN,
    EnUS,
}

impl LanguageType {
    pub fn lang_id(&self) -> &'static str {
        match self {
            LanguageType::ZhCN => "zh-CN",
            LanguageType::EnUS => "en-US",
        }
    }
}

impl From<&str> for LanguageType {
    fn from(value: &str) -> Self {
        match value {
            "en-US" | "en_us" | "en" => LanguageType::EnUS,
            _ => LanguageType::ZhCN,
        }
    }
}
