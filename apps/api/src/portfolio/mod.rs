// Portfolio features: resume submission, page generation, downloads.
// File persistence goes through storage; handlers never touch paths
// directly.

pub mod handlers;
pub mod ingest;
pub mod render;
pub mod storage;
