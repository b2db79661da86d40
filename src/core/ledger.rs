//! Sales ledger codec: header line plus comma-separated rows.
//!
//! Fields are never quoted or escaped, so each line is one row. A comma
//! inside a field shifts the columns of that row only.
//!
//! Parsing is lenient. Unknown columns are ignored, short rows fill the
//! missing cells with empty strings, and rows without a date or item name
//! are dropped.

use crate::domain::model::SalesEntry;
use crate::utils::error::{CatalystError, Result};

pub const LEDGER_COLUMNS: [&str; 5] = ["date", "item_sku", "item_name", "quantity_sold", "price"];

#[derive(Debug, Clone, Copy)]
enum Column {
    Date,
    ItemSku,
    ItemName,
    QuantitySold,
    Price,
}

impl Column {
    fn from_header(header: &str) -> Option<Self> {
        match header {
            "date" => Some(Self::Date),
            "item_sku" => Some(Self::ItemSku),
            "item_name" => Some(Self::ItemName),
            "quantity_sold" => Some(Self::QuantitySold),
            "price" => Some(Self::Price),
            _ => None,
        }
    }

    fn assign(self, entry: &mut SalesEntry, value: String) {
        match self {
            Self::Date => entry.date = value,
            Self::ItemSku => entry.item_sku = value,
            Self::ItemName => entry.item_name = value,
            Self::QuantitySold => entry.quantity_sold = value,
            Self::Price => entry.price = value,
        }
    }
}

pub fn parse_ledger(text: &str) -> Vec<SalesEntry> {
    let trimmed = text.trim();
    if trimmed.lines().count() < 2 {
        return Vec::new();
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(trimmed.as_bytes());

    let columns: Vec<Option<Column>> = match reader.headers() {
        Ok(headers) => headers.iter().map(Column::from_header).collect(),
        Err(e) => {
            tracing::warn!("⚠️ Unreadable ledger header: {}", e);
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    let mut dropped = 0usize;

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!("Skipping unreadable ledger row: {}", e);
                dropped += 1;
                continue;
            }
        };

        let mut entry = SalesEntry::default();
        for (position, column) in columns.iter().enumerate() {
            if let Some(column) = column {
                let value = record.get(position).unwrap_or_default().to_string();
                column.assign(&mut entry, value);
            }
        }

        if entry.item_name.is_empty() || entry.date.is_empty() {
            dropped += 1;
            continue;
        }
        entries.push(entry);
    }

    if dropped > 0 {
        tracing::warn!("⚠️ Dropped {} ledger rows without a date or item name", dropped);
    }
    tracing::debug!("Parsed {} ledger rows", entries.len());
    entries
}

pub fn serialize_ledger(entries: &[SalesEntry]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(LEDGER_COLUMNS)?;
    for entry in entries {
        writer.serialize(entry)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CatalystError::IoError(e.into_error()))?;
    let mut text = String::from_utf8_lossy(&bytes).into_owned();
    // 只有表頭時保留換行，否則最後一列不加換行
    if !entries.is_empty() && text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
