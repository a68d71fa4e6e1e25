//! UniFFI bindgen CLI for generating Swift and Kotlin bindings.
//!
//! ```bash
//! cargo run --features uniffi-cli --bin uniffi-bindgen generate \
//!     --library target/release/libmealdb_search.so --language kotlin --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
