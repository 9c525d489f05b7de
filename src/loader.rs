use crate::catalog::FilterDef;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::normalize::normalize_row;
use crate::types::Record;
use async_stream::stream;
use futures::{Stream, StreamExt};
use indexmap::IndexMap;

/// Load records from the configured dataset as a stream.
///
/// The file is read once; rows are parsed, normalized and yielded in
/// file order. The stream ends after the first error: a failed load
/// surfaces one error and the session does not proceed.
pub fn load_records(
    config: &Config,
    catalog: &[FilterDef],
) -> impl Stream<Item = Result<Record>> {
    let config = config.clone();
    let catalog = catalog.to_vec();
    Box::pin(stream! {
        let raw = match tokio::fs::read_to_string(&config.data_path).await {
            Ok(raw) => raw,
            Err(e) => {
                yield Err(Error::Io(e));
                return;
            }
        };

        let mut reader = csv::Reader::from_reader(raw.as_bytes());
        let headers = match reader.headers() {
            Ok(headers) => headers.clone(),
            Err(e) => {
                yield Err(Error::Csv(e));
                return;
            }
        };

        // Every catalog column must be present in the header row
        for def in &catalog {
            if !headers.iter().any(|header| header == def.source_field) {
                yield Err(Error::MissingColumn(def.source_field.clone()));
                return;
            }
        }

        let limit = config.limit.unwrap_or(usize::MAX);
        for (index, row) in reader.into_records().enumerate() {
            if index >= limit {
                break;
            }

            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    yield Err(Error::Csv(e));
                    return;
                }
            };

            let raw_fields: IndexMap<String, String> = headers
                .iter()
                .map(str::to_string)
                .zip(row.iter().map(str::to_string))
                .collect();

            match normalize_row(raw_fields, index, &catalog) {
                Ok(record) => yield Ok(record),
                Err(e) => {
                    yield Err(e);
                    return;
                }
            }
        }
    })
}

/// Load the whole dataset into memory.
///
/// Records are parsed and normalized once, then held read-only for the
/// lifetime of the session.
pub async fn load_all(config: &Config, catalog: &[FilterDef]) -> Result<Vec<Record>> {
    config.validate()?;

    let mut stream = std::pin::pin!(load_records(config, catalog));
    let mut records = Vec::new();

    while let Some(result) = stream.next().await {
        records.push(result?);
    }

    Ok(records)
}
