use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::DataType;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Signed types only valid for sine table (got {dtype} for {family})")]
    SignedTypeUnsupported {
        dtype: DataType,
        family: &'static str,
    },

    #[error("table length must be at least 1")]
    EmptyTable,

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
