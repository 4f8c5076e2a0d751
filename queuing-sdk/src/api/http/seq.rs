use async_trait::async_trait;
use gloo_net::http::Request;

use crate::api::seq::SeqApi;
use crate::model::seq::Seq;
use crate::Result;

use super::RespStatus;

pub struct SeqHttp {
    path: String,
}

impl SeqHttp {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait(?Send)]
impl SeqApi for SeqHttp {
    async fn get_seq(&self) -> Result<Seq> {
        let seq: Seq = Request::get(&self.path)
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        log::debug!("get seq: {:?}", seq);
        Ok(seq)
    }
}
