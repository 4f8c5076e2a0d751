use wasm_bindgen::JsValue;

pub type Reason = String;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// request server error
    #[error("network error: {0}")]
    Network(Reason),
    /// server answered with a status other than 200
    #[error("unexpected status: {0}")]
    Status(u16),
    /// convert server message to local type
    #[error("convert error: {0}")]
    Convert(Reason),
    /// js related error
    #[error("javascript error: {0}")]
    JavaScript(Reason),
}

impl From<gloo_net::Error> for Error {
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::SerdeError(err) => Error::Convert(err.to_string()),
            err => Error::Network(err.to_string()),
        }
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::JavaScript(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
