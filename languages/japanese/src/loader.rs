use std::collections::BTreeMap;
use std::path::Path;

use atena_core::LoadError;

/// Reads the plain-text tables that extend the built-in dictionaries
pub struct TableLoader;

impl TableLoader {
    /// Key/reading pairs from a JSON object or a `key<TAB>reading` file
    pub fn load_pairs(path: &Path) -> Result<Vec<(String, String)>, LoadError> {
        let content = read(path)?;
        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            || content.trim_start().starts_with('{');

        let pairs = if is_json {
            let map: BTreeMap<String, String> = serde_json::from_str(&content)?;
            map.into_iter().collect()
        } else {
            let mut pairs = Vec::new();
            for (number, line) in entries(&content) {
                let Some((key, reading)) = line.split_once('\t') else {
                    return Err(LoadError::InvalidLine {
                        path: path.display().to_string(),
                        line: number,
                        reason: "expected key<TAB>reading".to_string(),
                    });
                };
                pairs.push((key.trim().to_string(), reading.trim().to_string()));
            }
            pairs
        };

        tracing::info!("Loaded {} entries from {}", pairs.len(), path.display());
        Ok(pairs)
    }

    /// One entry per line
    pub fn load_lines(path: &Path) -> Result<Vec<String>, LoadError> {
        let content = read(path)?;
        let lines: Vec<String> = entries(&content)
            .map(|(_, line)| line.to_string())
            .collect();
        tracing::info!("Loaded {} entries from {}", lines.len(), path.display());
        Ok(lines)
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(content.trim_start_matches('\u{FEFF}').to_string())
}

/// Non-blank, non-comment lines with 1-based line numbers
fn entries(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_pairs_tsv() {
        let file = write_temp(".tsv", "# readings\n出版\tシュッパン\n\nＡＢＣ\tエービーシー\r\n");
        let pairs = TableLoader::load_pairs(file.path()).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("出版".to_string(), "シュッパン".to_string()),
                ("ＡＢＣ".to_string(), "エービーシー".to_string()),
            ]
        );
    }

    #[test]
    fn test_load_pairs_json() {
        let file = write_temp(".json", r#"{"講談社": "コウダンシャ"}"#);
        let pairs = TableLoader::load_pairs(file.path()).unwrap();
        assert_eq!(pairs, vec![("講談社".to_string(), "コウダンシャ".to_string())]);
    }

    #[test]
    fn test_load_pairs_invalid_line() {
        let file = write_temp(".tsv", "出版\tシュッパン\nbroken line\n");
        match TableLoader::load_pairs(file.path()) {
            Err(LoadError::InvalidLine { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_load_pairs_bad_json() {
        let file = write_temp(".json", "{not json");
        assert!(matches!(
            TableLoader::load_pairs(file.path()),
            Err(LoadError::JsonError(_))
        ));
    }

    #[test]
    fn test_load_lines() {
        let file = write_temp(".txt", "\u{FEFF}0422\n# comment\n 0428 \n");
        let lines = TableLoader::load_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["0422", " 0428 "]);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            TableLoader::load_lines(Path::new("/nonexistent/atena/table.txt")),
            Err(LoadError::FileNotFound(_))
        ));
    }
}
