use std::io::Write;

use atena_config::output::Delimiter;
use atena_lang_japanese::Converter;
use atena_types::{AtenaRecord, COLUMNS};

use crate::io::{parse_contacts, read_contacts, sniff_delimiter, write_records};

/// Every row, header included, as plain fields
fn read_rows(text: &str, delimiter: u8) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.trim_start_matches('\u{FEFF}').as_bytes())
        .records()
        .map(|row| row.unwrap().iter().map(String::from).collect())
        .collect()
}

#[test]
fn test_sniff_delimiter() {
    assert_eq!(sniff_delimiter("First Name\tLast Name,x\tNotes\n"), Delimiter::Tab);
    assert_eq!(sniff_delimiter("First Name,Last Name\n"), Delimiter::Comma);
    assert_eq!(sniff_delimiter(""), Delimiter::Comma);
}

#[test]
fn test_parse_contacts_maps_header() {
    let text = "First Name,Last Name,Phone 1 - Value\n太郎,山田,090-1234-5678\n,,\n花子,佐藤\n";
    let contacts = parse_contacts(text, Delimiter::Comma).unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].get("Last Name"), "山田");
    assert_eq!(contacts[0].get("Phone 1 - Value"), "090-1234-5678");
    // short rows leave the remaining columns absent
    assert_eq!(contacts[1].get("Phone 1 - Value"), "");
}

#[test]
fn test_parse_contacts_quoted_fields() {
    let text = "Last Name,Notes,Address 1 - Street\r\n\
                山田,\"say \"\"hi\"\"\",\"本町1-2-3\n共同ビル, 5F\"\r\n";
    let contacts = parse_contacts(text, Delimiter::Comma).unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].get("Notes"), "say \"hi\"");
    assert_eq!(contacts[0].get("Address 1 - Street"), "本町1-2-3\n共同ビル, 5F");
}

#[test]
fn test_parse_contacts_header_only() {
    assert!(parse_contacts("First Name\tLast Name", Delimiter::Tab).unwrap().is_empty());
    assert!(parse_contacts("", Delimiter::Comma).unwrap().is_empty());
}

#[test]
fn test_read_contacts_strips_bom_and_sniffs_tab() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "\u{FEFF}First Name\tLast Name\n太郎\t山田\n").unwrap();

    let contacts = read_contacts(file.path()).unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].get("First Name"), "太郎");
}

#[test]
fn test_read_contacts_missing_file() {
    let err = read_contacts(std::path::Path::new("/nonexistent/contacts.csv")).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/contacts.csv"));
}

#[test]
fn test_write_records_header_and_bom() {
    let mut buf = Vec::new();
    write_records(&mut buf, &[AtenaRecord::default()], Delimiter::Tab, true).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert!(text.starts_with('\u{FEFF}'));
    let lines: Vec<&str> = text.trim_start_matches('\u{FEFF}').split("\r\n").collect();
    assert_eq!(lines[0].split('\t').count(), COLUMNS.len());
    assert_eq!(lines[0].split('\t').next(), Some("姓"));
    assert_eq!(lines[1].split('\t').nth(8), Some("様"));
    assert_eq!(lines[2], "");
}

#[test]
fn test_write_records_quotes_when_needed() {
    let mut record = AtenaRecord::default();
    record.last_name = "a,b".to_string();
    record.notes[0] = "line1\nline2".to_string();

    let mut buf = Vec::new();
    write_records(&mut buf, &[record], Delimiter::Comma, false).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert!(!text.starts_with('\u{FEFF}'));
    assert!(text.contains("\"a,b\""));
    assert!(text.contains("\"line1\nline2\""));

    let rows = read_rows(&text, b',');
    assert_eq!(rows[1][0], "a,b");
    assert_eq!(rows[1].len(), COLUMNS.len());
}

#[test]
fn test_end_to_end_conversion() {
    let text = "Last Name,First Name,Organization Name,Phone 1 - Label,Phone 1 - Value\n\
                山田,太郎,株式会社ＮＨＫエデュケーショナル,Work,0312345678\n";
    let contacts = parse_contacts(text, Delimiter::Comma).unwrap();
    let records = Converter::new().convert_all(&contacts);

    let mut buf = Vec::new();
    write_records(&mut buf, &records, Delimiter::Tab, false).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let rows = read_rows(&text, b'\t');

    let column = |name: &str| COLUMNS.iter().position(|c| *c == name).unwrap();
    assert_eq!(rows[1][column("姓名")], "山田　太郎");
    assert_eq!(rows[1][column("会社名かな")], "エヌエイチケーエデュケーショナル");
    assert_eq!(rows[1][column("会社電話")], "03-1234-5678");
}
