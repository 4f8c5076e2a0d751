use self::http::{NavigatorClipboard, SeqHttp};

pub use self::{clipboard::ClipboardApi, seq::SeqApi};

mod clipboard;
mod http;
mod seq;

pub const SEQ_PATH: &str = "/seq";

pub fn seq() -> Box<dyn SeqApi> {
    Box::new(SeqHttp::new(SEQ_PATH))
}

pub fn clipboard() -> Box<dyn ClipboardApi> {
    Box::new(NavigatorClipboard)
}
