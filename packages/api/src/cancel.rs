//! Cancellation of in-flight requests.
//!
//! Every network call takes a [`CancelToken`]. Views create one per mount
//! and cancel it when they are torn down, so a response that arrives after
//! navigation never lands in a store as an error.

use std::future::Future;

use futures::future::{select, Either};
use futures::pin_mut;

pub use tokio_util::sync::CancellationToken as CancelToken;

use crate::ApiError;

/// Drive `fut` until it completes or `cancel` fires, whichever comes first.
pub async fn run_cancellable<F, T>(cancel: &CancelToken, fut: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    if cancel.is_cancelled() {
        return Err(ApiError::Cancelled);
    }

    let cancelled = cancel.cancelled();
    pin_mut!(fut);
    pin_mut!(cancelled);

    match select(fut, cancelled).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Cancelled),
    }
}
