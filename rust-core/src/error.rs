//! Construction-time errors for the transform engine

use thiserror::Error;

use crate::engine::Backend;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FftError {
    #[error("Transform size must be at least 1")]
    ZeroSize,

    #[error("Cannot allocate {0} bytes for transform storage")]
    OutOfMemory(usize),

    #[error("Scale factor `{name}` must be finite (found: {value})")]
    InvalidScale { name: &'static str, value: f64 },

    #[error("Backend {0:?} was not compiled into this build")]
    BackendUnavailable(Backend),
}

pub type Result<T> = std::result::Result<T, FftError>;

/// Fallible `vec![elem; n]` that reports allocation failure instead of aborting
macro_rules! try_vec {
    ($elem:expr; $n:expr) => {{
        let n: usize = $n;
        let mut v = Vec::new();
        v.try_reserve_exact(n).map_err(|_| {
            crate::error::FftError::OutOfMemory(n.saturating_mul(std::mem::size_of_val(&$elem)))
        })?;
        v.resize(n, $elem);
        v
    }};
}

pub(crate) use try_vec;
