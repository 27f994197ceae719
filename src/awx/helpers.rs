//! Helper functions for multi-parent operations
//!
//! These utilities support fetching the same related collection from
//! several parents (e.g. teams of several organizations) concurrently.

use futures::future::join_all;
use indicatif::ProgressBar;
use log::info;
use std::future::Future;

use crate::error::AwxError;

/// Fetch data from multiple parents concurrently
///
/// The `fetcher` is called once per parent id and should return either
/// the fetched data or the parent id paired with its error.
pub async fn fetch_from_parents<T, F, Fut>(
    parent_ids: Vec<i64>,
    fetcher: F,
) -> Vec<Result<T, (i64, AwxError)>>
where
    F: Fn(i64) -> Fut,
    Fut: Future<Output = Result<T, (i64, AwxError)>>,
{
    let futures = parent_ids.into_iter().map(fetcher);
    join_all(futures).await
}

/// Collect results from concurrent parent fetches
///
/// Returns (successes, had_errors). Errors are printed to stderr,
/// respecting spinner suspension if a spinner is active.
pub fn collect_parent_results<T>(
    results: Vec<Result<T, (i64, AwxError)>>,
    spinner: &Option<ProgressBar>,
    resource_name: &str,
) -> (Vec<T>, bool) {
    let mut successes = Vec::new();
    let mut had_errors = false;

    for result in results {
        match result {
            Ok(data) => successes.push(data),
            Err((parent, e)) => {
                had_errors = true;
                let msg = format!(
                    "Error fetching {} for {}:\n  {}\n",
                    resource_name, parent, e
                );
                if let Some(ref s) = spinner {
                    s.suspend(|| eprintln!("{}", msg));
                } else {
                    eprintln!("{}", msg);
                }
            }
        }
    }

    (successes, had_errors)
}

/// Log completion status to info log
pub fn log_completion(had_errors: bool) {
    if had_errors {
        info!("Completed with some errors");
    } else {
        info!("Completed successfully");
    }
}
