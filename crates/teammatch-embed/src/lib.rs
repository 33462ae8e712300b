//! teammatch-embed - Embedding gateway for the teammatch engine.
//!
//! The engine never computes embeddings itself; it talks to an
//! [`EmbeddingProvider`]. Two implementations live here:
//!
//! - [`HttpEmbeddingClient`]: POST `/embed/batch` against an external
//!   embedding service (primary path).
//! - [`HashEncoder`]: deterministic, unit-normalized local encoder for tests
//!   and offline runs.
//!
//! Settings resolution (YAML file plus environment overrides) happens in
//! [`EmbedSettings`]; a missing endpoint or credential fails at client
//! construction, before any matching work starts.

mod error;
mod hash;
mod http;
mod provider;
mod settings;

pub use error::EmbedError;
pub use hash::HashEncoder;
pub use http::HttpEmbeddingClient;
pub use provider::EmbeddingProvider;
pub use settings::EmbedSettings;
