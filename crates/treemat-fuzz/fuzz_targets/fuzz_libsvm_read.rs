//! Fuzz target for the libsvm reader.
//!
//! Arbitrary bytes must produce either a matrix or a `ReadError`, never a
//! panic.
//!
//! Run with:
//! ```sh
//! cargo +nightly fuzz run fuzz_libsvm_read
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

use treemat::io::read_libsvm_from;

fuzz_target!(|data: &[u8]| {
    if let Ok(matrix) = read_libsvm_from(data) {
        // Stored entries and flattened values must agree.
        assert_eq!(matrix.flatten().len(), matrix.nnz());
    }
});
