//! ARS Console Common Library
//!
//! ブラウザ版コンソール(WASM)とCLIで共有される型・正規化処理・APIクライアント

pub mod constants;
pub mod error;
pub mod types;
pub mod envelope;
pub mod sequence;
pub mod api;
pub mod analysis;
pub mod records;
pub mod dashboard;
pub mod formatter;
pub mod export;

pub use error::{Error, Result};
pub use types::{AnalysisResult, Deliverability, PageRequest, PageState, RecordId, RecordRow};
pub use envelope::{normalize_records, RecordsEnvelope, RecordsPage};
pub use sequence::{RequestSequence, Ticket};
pub use api::{ApiClient, ApiConfig, Clock, Endpoint, RawResponse, Transport};
pub use analysis::{analyze_address, failure_message, validate_address, ConfidenceLevel};
pub use records::{fetch_records_page, record_cells, record_detail_rows, RecordCells};
pub use dashboard::{run_probe, Probe, ProbeReport, StatCard, OVERVIEW_STATS};
pub use formatter::{format_address, format_date, truncate_text};
pub use export::{export_records, records_to_csv, CsvExport, ExportOutcome};
