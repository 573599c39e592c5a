//! Build script for the optional N-API addon.
//!
//! With the `node` feature enabled this configures the link step so the
//! compiled `cdylib` can be loaded by Node.js. Without it the script does
//! nothing and the crate builds as a plain Rust library.

fn main() {
    #[cfg(feature = "node")]
    napi_build::setup();
}
