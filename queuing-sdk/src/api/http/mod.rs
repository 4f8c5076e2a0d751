use async_trait::async_trait;
use gloo_net::http::Response;

pub use clipboard::*;
pub use seq::*;

use crate::error::Error;
use crate::Result;

mod clipboard;
mod seq;

#[async_trait(?Send)]
pub trait RespStatus: Sized {
    async fn success(self) -> Result<Self>;
}

#[async_trait(?Send)]
impl RespStatus for Response {
    async fn success(self) -> Result<Self> {
        // only a plain 200 carries a body we understand
        match self.status() {
            200 => Ok(self),
            status => Err(Error::Status(status)),
        }
    }
}
