use cw_core::CoreError;
use cw_crawl::CrawlError;
use cw_db::DbError;

use thiserror::Error;

/// Failure of a sync workflow, grouped by the stage that failed
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("{0}")]
    Validation(#[from] CoreError),

    #[error("{0}")]
    Crawl(#[from] CrawlError),

    #[error("{0}")]
    Persistence(#[from] DbError),
}

pub type Result<T> = std::result::Result<T, SyncError>;
