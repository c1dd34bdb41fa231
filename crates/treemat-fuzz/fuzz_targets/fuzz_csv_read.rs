//! Fuzz target for the delimited reader.
//!
//! The first byte picks the delimiter, the rest is the file body. Any
//! successfully read matrix must be rectangular.
//!
//! Run with:
//! ```sh
//! cargo +nightly fuzz run fuzz_csv_read
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

use treemat::io::{CsvOptions, read_csv_from};

const DELIMITERS: [&str; 4] = [",", "\t", ";", "::"];

fuzz_target!(|data: &[u8]| {
    let Some((&selector, body)) = data.split_first() else {
        return;
    };
    let options = CsvOptions::builder()
        .delimiter(DELIMITERS[selector as usize % DELIMITERS.len()])
        .build();
    if let Ok(matrix) = read_csv_from(body, &options) {
        assert_eq!(matrix.flatten().len(), matrix.n_rows() * matrix.n_cols());
    }
});
