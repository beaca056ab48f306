pub mod etl;
pub mod extract;
pub mod pipeline;
pub mod validate;
pub mod writer;

pub use crate::domain::model::{Attribute, CsvRows, Item, LoadResponse, RawRow, RowInput};
pub use crate::domain::ports::{ConfigProvider, CustomerTable, Pipeline, Storage};
pub use crate::utils::error::Result;
