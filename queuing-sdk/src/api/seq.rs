use async_trait::async_trait;

use crate::model::seq::Seq;
use crate::Result;

#[async_trait(?Send)]
pub trait SeqApi {
    /// fetch a new ticket number
    async fn get_seq(&self) -> Result<Seq>;
}
