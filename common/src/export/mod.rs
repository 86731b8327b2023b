//! エクスポート（CLI・ブラウザ共通）

pub mod csv_core;

pub use csv_core::{
    export_file_name, export_records, records_to_csv, utc_date_from_millis, CsvExport,
    ExportOutcome, CSV_MIME_TYPE, EXPORT_EMPTY_WARNING, EXPORT_SUCCESS_MESSAGE,
    RECORD_CSV_HEADERS,
};
