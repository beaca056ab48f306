use crate::domain::model::{Attribute, CsvRows, Item, RawRow, RowInput, ITEM_KEYS};
use crate::utils::error::{LoaderError, Result};

/// Hands decoded text to a header-less CSV parser, one record per line.
///
/// Field counts are not enforced here, and a blank line is kept as a
/// zero-field row; short or long rows fail in [`extract_item_from_row`].
pub fn csv_reader(text: &str) -> RowInput {
    RowInput::Csv(CsvRows::new(text.lines().map(str::to_string).collect()))
}

fn parse_line(line: &str) -> Result<RawRow> {
    if line.is_empty() {
        return Ok(RawRow::Fields(Vec::new()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    let mut record = csv::StringRecord::new();
    reader.read_record(&mut record)?;
    Ok(RawRow::from(&record))
}

impl Iterator for CsvRows {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| parse_line(&line))
    }
}

impl From<&csv::StringRecord> for RawRow {
    fn from(record: &csv::StringRecord) -> Self {
        RawRow::Fields(record.iter().map(str::to_string).collect())
    }
}

/// Builds an item from the six positional fields of a row.
pub fn extract_item_from_row(row: &RawRow) -> Result<Item> {
    let fields = match row {
        RawRow::Fields(fields) => fields,
        RawRow::Mapping(_) => return Err(LoaderError::WrongRowShape),
    };

    if fields.len() > ITEM_KEYS.len() {
        return Err(LoaderError::RowLength {
            found: fields.len(),
        });
    }
    if fields.len() < ITEM_KEYS.len() {
        return Err(LoaderError::IndexOutOfRange {
            found: fields.len(),
        });
    }

    Ok(ITEM_KEYS
        .iter()
        .zip(fields)
        .map(|(key, value)| (key.to_string(), Attribute::S(value.clone())))
        .collect())
}
