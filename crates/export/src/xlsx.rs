//! Minimal SpreadsheetML workbook writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use zip::{write::FileOptions, CompressionMethod};

use shared::Participant;

/// Worksheet name shown in the spreadsheet application
const SHEET_NAME: &str = "Participantes";

/// Header row; matches the on-disk JSON keys, which is what the previous
/// exporter produced as column names.
const COLUMNS: [&str; 5] = ["nombre", "edad", "correo", "categoria", "institucion"];

/// Write all records into a single-sheet `.xlsx` workbook at `output`.
///
/// One row per record in the given order, a header row on top, ages as
/// numeric cells and everything else as inline strings. Parent directories
/// are created if missing.
pub fn write_xlsx(output: &Path, participants: &[Participant]) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory {:?}", parent))?;
        }
    }

    let file = File::create(output)
        .with_context(|| format!("Failed to write spreadsheet file {:?}", output))?;
    let mut zip = zip::ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts: [(&str, String); 6] = [
        ("[Content_Types].xml", content_types_xml()),
        ("_rels/.rels", package_rels_xml()),
        ("docProps/core.xml", core_props_xml()),
        ("xl/workbook.xml", workbook_xml()),
        ("xl/_rels/workbook.xml.rels", workbook_rels_xml()),
        ("xl/worksheets/sheet1.xml", sheet_xml(participants)),
    ];

    for (name, content) in parts {
        zip.start_file(name, options)
            .with_context(|| format!("Failed to add {} to workbook", name))?;
        zip.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write {} into workbook", name))?;
    }

    zip.finish().context("Failed to finalize workbook")?;
    Ok(())
}

fn content_types_xml() -> String {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
        r#"<Default Extension="xml" ContentType="application/xml"/>"#,
        r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
        r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
        r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
        r#"</Types>"#,
    )
    .to_string()
}

fn package_rels_xml() -> String {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#,
        r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#,
        r#"</Relationships>"#,
    )
    .to_string()
}

fn core_props_xml() -> String {
    let created = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            r#"<dc:creator>registro</dc:creator>"#,
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{created}</dcterms:created>"#,
            r#"</cp:coreProperties>"#,
        ),
        created = created
    )
}

fn workbook_xml() -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            r#"<sheets><sheet name="{name}" sheetId="1" r:id="rId1"/></sheets>"#,
            r#"</workbook>"#,
        ),
        name = SHEET_NAME
    )
}

fn workbook_rels_xml() -> String {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>"#,
        r#"</Relationships>"#,
    )
    .to_string()
}

/// Build the single worksheet: header row plus one row per record.
fn sheet_xml(participants: &[Participant]) -> String {
    let mut rows = String::new();

    rows.push_str(r#"<row r="1">"#);
    for (col, header) in COLUMNS.iter().enumerate() {
        rows.push_str(&inline_string_cell(col, 1, header));
    }
    rows.push_str("</row>");

    for (idx, p) in participants.iter().enumerate() {
        let row = idx + 2;
        rows.push_str(&format!(r#"<row r="{}">"#, row));
        rows.push_str(&inline_string_cell(0, row, &p.full_name));
        rows.push_str(&number_cell(1, row, p.age));
        rows.push_str(&inline_string_cell(2, row, &p.email));
        rows.push_str(&inline_string_cell(3, row, p.category.wire_name()));
        rows.push_str(&inline_string_cell(4, row, &p.institution));
        rows.push_str("</row>");
    }

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
            r#"<sheetData>{rows}</sheetData>"#,
            r#"</worksheet>"#,
        ),
        rows = rows
    )
}

fn inline_string_cell(col: usize, row: usize, value: &str) -> String {
    format!(
        r#"<c r="{}{}" t="inlineStr"><is><t>{}</t></is></c>"#,
        column_letter(col),
        row,
        escape_xml(value)
    )
}

fn number_cell(col: usize, row: usize, value: u32) -> String {
    format!(r#"<c r="{}{}"><v>{}</v></c>"#, column_letter(col), row, value)
}

/// Column index to letter; five columns is all this sheet ever has.
fn column_letter(col: usize) -> char {
    (b'A' + col as u8) as char
}

/// Escape the five XML-special characters for text content.
fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
