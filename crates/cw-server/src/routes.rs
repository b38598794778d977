use std::convert::Infallible;

use warp::{Filter, Rejection, Reply};

use crate::handlers;
use crate::server::ServerState;

/// Upper bound on a `/copy` body.
const MAX_COPY_BYTES: u64 = 16 * 1024 * 1024;

/// Full route tree: the page, the copy/paste API and permissive CORS.
/// The password gate is the sole protection; any origin may call in.
pub fn routes(
    state: ServerState,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["password", "content-type"])
        .allow_methods(vec!["GET", "POST", "OPTIONS"]);

    index_route()
        .or(copy_route(state.clone()))
        .or(paste_route(state))
        .with(cors)
}

fn index_route() -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path::end()
        .and(warp::get())
        .and_then(handlers::handle_index)
}

fn copy_route(
    state: ServerState,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("copy")
        .and(warp::post())
        .and(warp::header::optional::<String>("password"))
        .and(warp::body::content_length_limit(MAX_COPY_BYTES))
        .and(warp::body::bytes())
        .and(with_state(state))
        .and_then(handlers::handle_copy)
}

fn paste_route(
    state: ServerState,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("paste")
        .and(warp::get())
        .and(warp::header::optional::<String>("password"))
        .and(with_state(state))
        .and_then(handlers::handle_paste)
}

fn with_state(
    state: ServerState,
) -> impl Filter<Extract = (ServerState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}
