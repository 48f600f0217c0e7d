// tests/support/mod.rs
// Support code shared across the integration test binaries. Individual test
// crates use different subsets, so allow the resulting dead_code and
// unused_imports warnings at the module level.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
