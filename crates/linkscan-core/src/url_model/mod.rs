//! URL modeling: input normalization and the domain allow-list test.
//!
//! Input lists come from hand-maintained files, so entries may lack a scheme
//! or carry stray whitespace. Normalization happens before the allow-list
//! test so that `www.rmit.edu.au` and `https://www.rmit.edu.au` are treated
//! the same.

mod host;
mod normalize;

pub use host::is_allowed_host;
pub use normalize::normalize_url;
