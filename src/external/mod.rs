//! Best-effort helpers outside the process: text-to-speech and the
//! supplementary definition lookup. Callers log failures and carry on.

pub mod lookup;
pub mod speech;
