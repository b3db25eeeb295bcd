//! UniFFI bindgen CLI tool for generating language bindings.
//!
//! Builds Swift, Kotlin, Python and Ruby bindings for the katsu-curry
//! recipe generator from the compiled library.
//!
//! ## Usage
//!
//! ```bash
//! cargo build --release
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/libkatsu_curry.so --language kotlin --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
