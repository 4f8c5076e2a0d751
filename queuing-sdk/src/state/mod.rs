use serde::{Deserialize, Serialize};
use yewdux::Store;

use i18n::LanguageType;

pub use board::*;

mod board;

/// language type
#[derive(Debug, Default, Clone, PartialEq, Store, Serialize, Deserialize)]
#[store(storage = "local")]
pub struct I18nState {
    pub lang: LanguageType,
}
