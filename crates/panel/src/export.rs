//! CSV export of the full, unfiltered dataset.
//!
//! The separator mirrors the export dialog's decimal-separator control
//! and is used verbatim as the FIELD separator, `,` included. That
//! collides with CSV's own comma; callers opted into it.

use areas::{AreaRecord, fold_diacritics};
use serde::{Deserialize, Serialize};

use crate::variant::DashboardVariant;

/// UTF-8 byte-order mark. Keeps accented text readable in spreadsheet
/// apps whether or not stripping was requested.
const BOM: &str = "\u{feff}";

/// Upstream column set, in publication order.
pub const CSV_COLUMNS: [&str; 12] = [
    "NOME",
    "UF",
    "MODALIDADE",
    "FASE",
    "USO",
    "CATEGORIA",
    "RANK",
    "DESMATAM_1",
    "FOCOS DE C",
    "N DE CAR",
    "CAR",
    "ESTRADAS N",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRequest {
    /// Download-button click count; absent or zero means the button never
    /// fired and the export is a no-op.
    #[serde(default)]
    pub clicks: Option<u64>,
    /// `.` or `,`, straight from the dialog.
    #[serde(default = "default_separator")]
    pub separator: char,
    #[serde(default)]
    pub remove_accents: bool,
}

fn default_separator() -> char {
    '.'
}

impl Default for DownloadRequest {
    fn default() -> Self {
        Self {
            clicks: None,
            separator: default_separator(),
            remove_accents: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CsvDownload {
    pub filename: String,
    pub content: String,
}

/// Serializes the full record collection, never the filtered top-10.
/// Returns `None` when the trigger never fired: no spurious download.
pub fn export_csv(
    records: &[AreaRecord],
    variant: &DashboardVariant,
    request: &DownloadRequest,
) -> Option<CsvDownload> {
    match request.clicks {
        None | Some(0) => return None,
        Some(_) => {}
    }

    Some(CsvDownload {
        filename: variant.csv_filename.to_string(),
        content: dataset_csv(records, request.separator, request.remove_accents),
    })
}

pub fn dataset_csv(records: &[AreaRecord], separator: char, remove_accents: bool) -> String {
    let mut out = String::new();
    out.push_str(BOM);
    push_row(
        &mut out,
        separator,
        CSV_COLUMNS.iter().map(|c| c.to_string()),
    );

    for record in records {
        let text = |value: &Option<String>| -> String {
            let raw = value.as_deref().unwrap_or("");
            if remove_accents {
                fold_diacritics(raw)
            } else {
                raw.to_string()
            }
        };
        let name = if remove_accents {
            fold_diacritics(&record.name)
        } else {
            record.name.clone()
        };

        let fields = [
            name,
            text(&record.uf),
            text(&record.modality),
            text(&record.phase),
            text(&record.land_use),
            text(&record.category),
            record.rank.to_string(),
            fmt_float(record.threat_km2),
            fmt_int(record.heat_spots),
            fmt_int(record.car_count),
            fmt_float(record.car_area_km2),
            fmt_float(record.road_km),
        ];
        push_row(&mut out, separator, fields.into_iter());
    }

    out
}

fn fmt_float(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => String::new(),
    }
}

fn fmt_int(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

fn push_row(out: &mut String, separator: char, fields: impl Iterator<Item = String>) {
    for (idx, field) in fields.enumerate() {
        if idx > 0 {
            out.push(separator);
        }
        push_field(out, separator, &field);
    }
    out.push('\n');
}

/// Minimal quoting: only fields containing the separator, a quote or a
/// line break get wrapped, with embedded quotes doubled.
fn push_field(out: &mut String, separator: char, field: &str) {
    let needs_quotes =
        field.contains(separator) || field.contains('"') || field.contains('\n') || field.contains('\r');
    if !needs_quotes {
        out.push_str(field);
        return;
    }
    out.push('"');
    for ch in field.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}
