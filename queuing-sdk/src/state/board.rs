use fluent::{FluentBundle, FluentResource};
use i18n::{en_us, zh_cn, LanguageType};
use utils::tr;

use crate::api::ClipboardApi;
use crate::model::seq::Seq;
use crate::Result;

/// View model of the seq board: the display field value and the last copied
/// text, which drives the status line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BoardState {
    value: String,
    copied: Option<String>,
}

impl BoardState {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            value: initial.into(),
            copied: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// last text handed to the clipboard, `None` before the first copy
    pub fn copied(&self) -> Option<&str> {
        self.copied.as_deref()
    }

    /// Status line in the bundle's language, `None` while it stays hidden.
    pub fn help(&self, i18n: &FluentBundle<FluentResource>) -> Option<String> {
        self.copied
            .as_deref()
            .map(|seq| tr!(i18n, "copied", "seq" => seq))
    }

    /// Apply the result of `GET /seq`. Returns true when the field changed.
    ///
    /// Failures leave the field untouched.
    pub fn loaded(&mut self, result: Result<Seq>) -> bool {
        match result {
            Ok(seq) => {
                self.value = seq.decorated();
                true
            }
            Err(err) => {
                log::debug!("get seq failed: {}", err);
                false
            }
        }
    }

    /// Record a copy and return the text to put on the clipboard.
    ///
    /// `live` is what the input currently holds; without it the last value
    /// written by the board is used.
    pub fn copy(&mut self, live: Option<String>) -> String {
        let text = live.unwrap_or_else(|| self.value.clone());
        self.copied = Some(text.clone());
        text
    }
}

/// messages of the seq board
pub fn board_bundle(lang: LanguageType) -> FluentBundle<FluentResource> {
    let res = match lang {
        LanguageType::ZhCN => zh_cn::SEQ_BOARD,
        LanguageType::EnUS => en_us::SEQ_BOARD,
    };
    utils::create_bundle(lang, res)
}

/// Hand `text` to the clipboard. The outcome is only logged.
pub async fn write_clipboard(clipboard: &dyn ClipboardApi, text: &str) {
    if let Err(err) = clipboard.copy(text).await {
        log::warn!("copy to clipboard failed: {}", err);
    }
}
