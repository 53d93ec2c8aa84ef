// Resume extraction pipeline
// Format sniffing → text decoding → field extraction, plus the upload endpoint.
// Decoding and matching are CPU-bound and run inside tokio::task::spawn_blocking.

pub mod decode;
pub mod fields;
#[cfg(test)]
mod fixtures;
pub mod format;
pub mod handlers;
pub mod name;
pub mod pipeline;
pub mod vocabulary;
