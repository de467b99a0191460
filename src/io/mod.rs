//! IO utilities for loading numeric tables from delimited text files.

pub mod fields;
pub mod progress;
pub mod tabular;

pub use fields::{is_valid_number, DELIMITER};
pub use progress::{LogProgress, NoProgress, ProgressSink, ProgressTick};
pub use tabular::{read_csv_matrix, TabularReader};
