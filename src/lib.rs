mod filter;
mod tool;

pub use arrow;
pub use filter::filter_columns;
pub use tool::{ColumnFilter, FilterError, FilterOptions};
