//! Export of an analytics document as downloadable content
//!
//! Serializers only build [`ExportBlob`]s; writing them anywhere is the
//! caller's job ([`write_blob`] covers the plain-directory case).

pub mod csv;
pub mod json;
pub mod report;

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use dexdash_core::{AnalyticsDocument, DexDashError, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Export;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Report,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Report];

    pub fn purpose_tag(&self) -> &'static str {
        match self {
            ExportFormat::Json => "ANALYSIS",
            ExportFormat::Csv => "DATA",
            ExportFormat::Report => "REPORT",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Report => "txt",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Report => "text/plain",
        }
    }
}

/// Content handed to whatever saves or prints it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportBlob {
    pub filename: String,
    pub mime: &'static str,
    pub content: String,
}

/// Metadata envelope stamped on every JSON export.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExportMeta {
    pub timestamp: String,
    pub platform: String,
    pub exported_by: String,
    pub note: String,
}

/// Export-time inputs: the clock reading and the configured envelope strings.
#[derive(Debug, Clone)]
pub struct ExportContext {
    pub exported_at: DateTime<Utc>,
    pub platform: String,
    pub exported_by: String,
    pub note: String,
}

impl ExportContext {
    pub fn from_config(export: &Export, exported_at: DateTime<Utc>) -> Self {
        Self {
            exported_at,
            platform: export.platform.clone(),
            exported_by: export.exported_by.clone(),
            note: export.note.clone(),
        }
    }

    pub fn meta(&self) -> ExportMeta {
        ExportMeta {
            timestamp: self.exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            platform: self.platform.clone(),
            exported_by: self.exported_by.clone(),
            note: self.note.clone(),
        }
    }
}

pub fn export(doc: &AnalyticsDocument, format: ExportFormat, ctx: &ExportContext) -> Result<ExportBlob> {
    let filename = export_filename(doc, format, ctx)?;
    let content = match format {
        ExportFormat::Json => json::render(doc, ctx)?,
        ExportFormat::Csv => csv::render(doc)?,
        ExportFormat::Report => report::render(doc, ctx.exported_at),
    };

    Ok(ExportBlob {
        filename,
        mime: format.mime(),
        content,
    })
}

/// `{SYMBOL}_{TAG}_{millis}.{ext}`; the export time keeps repeated exports apart.
pub fn export_filename(doc: &AnalyticsDocument, format: ExportFormat, ctx: &ExportContext) -> Result<String> {
    let symbol = required_symbol(doc)?;
    Ok(format!(
        "{}_{}_{}.{}",
        sanitize_file_component(symbol),
        format.purpose_tag(),
        ctx.exported_at.timestamp_millis(),
        format.extension()
    ))
}

pub fn write_blob(dir: impl AsRef<Path>, blob: &ExportBlob) -> Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    let path = dir.join(&blob.filename);
    std::fs::write(&path, &blob.content)?;
    info!("💾 Wrote {} ({} bytes, {})", path.display(), blob.content.len(), blob.mime);
    Ok(path)
}

pub(crate) fn required_symbol(doc: &AnalyticsDocument) -> Result<&str> {
    match doc.identity.symbol.as_deref().map(str::trim) {
        Some(symbol) if !symbol.is_empty() => Ok(symbol),
        _ => Err(DexDashError::Export("pair has no base token symbol".to_string())),
    }
}

fn sanitize_file_component(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use dexdash_core::{MarketMetrics, MomentumProfile, PairIdentity, TraderBehavior};

    fn doc_with_symbol(symbol: Option<&str>) -> AnalyticsDocument {
        AnalyticsDocument {
            identity: PairIdentity {
                symbol: symbol.map(str::to_string),
                ..Default::default()
            },
            market_metrics: MarketMetrics::default(),
            momentum_profile: MomentumProfile::default(),
            trader_behavior: TraderBehavior::default(),
        }
    }

    fn ctx() -> ExportContext {
        ExportContext::from_config(&Export::default(), Utc.timestamp_millis_opt(1_700_000_000_123).unwrap())
    }

    #[test]
    fn test_filenames() {
        let doc = doc_with_symbol(Some("BONK"));
        assert_eq!(export_filename(&doc, ExportFormat::Json, &ctx()).unwrap(), "BONK_ANALYSIS_1700000000123.json");
        assert_eq!(export_filename(&doc, ExportFormat::Csv, &ctx()).unwrap(), "BONK_DATA_1700000000123.csv");
        assert_eq!(export_filename(&doc, ExportFormat::Report, &ctx()).unwrap(), "BONK_REPORT_1700000000123.txt");
    }

    #[test]
    fn test_filename_symbol_is_sanitized() {
        let doc = doc_with_symbol(Some("../$WIF"));
        assert_eq!(export_filename(&doc, ExportFormat::Csv, &ctx()).unwrap(), "____WIF_DATA_1700000000123.csv");
    }

    #[test]
    fn test_missing_symbol_fails_export() {
        for symbol in [None, Some("  ")] {
            let err = export(&doc_with_symbol(symbol), ExportFormat::Json, &ctx()).unwrap_err();
            assert!(matches!(err, DexDashError::Export(_)));
        }
    }

    #[test]
    fn test_meta_timestamp_format() {
        let meta = ctx().meta();
        assert_eq!(meta.timestamp, "2023-11-14T22:13:20.123Z");
        assert_eq!(meta.platform, "DexDash Pro");
        assert_eq!(meta.exported_by, "User");
    }

    #[test]
    fn test_blob_mime_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let doc = doc_with_symbol(Some("BONK"));

        for format in ExportFormat::ALL {
            let blob = export(&doc, format, &ctx()).unwrap();
            assert_eq!(blob.mime, format.mime());

            let path = write_blob(dir.path().join("exports"), &blob).unwrap();
            assert_eq!(std::fs::read_to_string(path).unwrap(), blob.content);
        }
    }
}
