use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use tracing::debug;
use warp::{Filter, Rejection, Reply};

use crate::seq::{format_seq, SeqReply};
use crate::store::SeqStore;

/// `GET /seq` plus static files for everything else
pub fn routes(
    store: Arc<SeqStore>,
    static_dir: PathBuf,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let seq = warp::path("seq")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store))
        .and_then(get_seq);

    let files = warp::get().and(warp::fs::dir(static_dir));

    seq.or(files).with(warp::trace::request())
}

fn with_store(
    store: Arc<SeqStore>,
) -> impl Filter<Extract = (Arc<SeqStore>,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}

/// every request issues a new number
async fn get_seq(store: Arc<SeqStore>) -> Result<impl Reply, Infallible> {
    let n = store.tick().await;
    let seq = format_seq(Local::now().date_naive(), n);
    debug!("issue seq {}", seq);
    Ok(warp::reply::json(&SeqReply { seq }))
}
