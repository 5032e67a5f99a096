//! What the server actually offers.
//!
//! `tools` holds the callable tools and their dispatcher. `resources` and
//! `prompts` are read-only catalogs that point clients at those tools.

pub mod prompts;
pub mod resources;
pub mod tools;
