//! Record store: canonical schema, CSV persistence and the operations journal.

pub mod csv_store;
pub mod journal;
pub mod schema;
pub mod table;

pub use csv_store::{CsvStore, LoadReport};
pub use table::{Cells, Row, RowView, Table};
