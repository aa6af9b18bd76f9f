//! Reading and writing data trees as JSON, NDJSON or YAML documents.

use std::fmt;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::data::Data;

/// Error type for document operations
#[derive(Debug)]
pub enum DocumentError {
    JsonError(serde_json::Error),
    YamlError(serde_yaml::Error),
    IoError(std::io::Error),
    UnknownFormat(String),
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        DocumentError::JsonError(err)
    }
}

impl From<serde_yaml::Error> for DocumentError {
    fn from(err: serde_yaml::Error) -> Self {
        DocumentError::YamlError(err)
    }
}

impl From<std::io::Error> for DocumentError {
    fn from(err: std::io::Error) -> Self {
        DocumentError::IoError(err)
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::JsonError(e) => write!(f, "JSON error: {}", e),
            DocumentError::YamlError(e) => write!(f, "YAML error: {}", e),
            DocumentError::IoError(e) => write!(f, "IO error: {}", e),
            DocumentError::UnknownFormat(name) => {
                write!(f, "Unknown format '{}' (expected json, ndjson or yaml)", name)
            }
        }
    }
}

impl std::error::Error for DocumentError {}

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// One or more JSON values
    Json,
    /// One compact JSON value per line
    Ndjson,
    /// One or more `---`-separated YAML documents
    Yaml,
}

impl DocumentFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(DocumentFormat::Json),
            "ndjson" | "jsonl" => Some(DocumentFormat::Ndjson),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Ndjson => "ndjson",
            DocumentFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

impl FromStr for DocumentFormat {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "ndjson" | "jsonl" => Ok(DocumentFormat::Ndjson),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            _ => Err(DocumentError::UnknownFormat(s.to_string())),
        }
    }
}

/// Read every document in `reader`.
///
/// JSON and NDJSON input may hold any number of whitespace-separated values.
/// Input with no content holds no documents in every format. Readers are
/// consumed byte by byte, so wrap files and stdin in a `BufReader`.
pub fn read_documents<R: Read>(
    mut reader: R,
    format: DocumentFormat,
) -> Result<Vec<Data>, DocumentError> {
    let documents = match format {
        DocumentFormat::Json | DocumentFormat::Ndjson => serde_json::Deserializer::from_reader(reader)
            .into_iter::<Data>()
            .collect::<Result<Vec<_>, _>>()?,
        DocumentFormat::Yaml => {
            // An empty YAML stream would otherwise parse as a single null document.
            let mut text = String::new();
            reader.read_to_string(&mut text)?;
            if text.trim().is_empty() {
                Vec::new()
            } else {
                serde_yaml::Deserializer::from_str(&text)
                    .map(Data::deserialize)
                    .collect::<Result<Vec<_>, _>>()?
            }
        }
    };

    tracing::debug!("Read {} {} document(s)", documents.len(), format);
    Ok(documents)
}

/// Write `documents` in the given format and flush the writer.
///
/// `pretty` only affects JSON output; NDJSON always writes one compact value
/// per line.
pub fn write_documents<W: Write>(
    mut writer: W,
    documents: &[Data],
    format: DocumentFormat,
    pretty: bool,
) -> Result<(), DocumentError> {
    match format {
        DocumentFormat::Json => {
            for document in documents {
                if pretty {
                    serde_json::to_writer_pretty(&mut writer, document)?;
                } else {
                    serde_json::to_writer(&mut writer, document)?;
                }
                writeln!(writer)?;
            }
        }
        DocumentFormat::Ndjson => {
            for document in documents {
                serde_json::to_writer(&mut writer, document)?;
                writeln!(writer)?;
            }
        }
        DocumentFormat::Yaml => {
            for (i, document) in documents.iter().enumerate() {
                if i > 0 {
                    writeln!(writer, "---")?;
                }
                serde_yaml::to_writer(&mut writer, document)?;
            }
        }
    }

    writer.flush()?;
    tracing::debug!("Wrote {} {} document(s)", documents.len(), format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_json_stream() {
        let input = br#"{"a": 1} ["b"]
"c""#;
        let docs = read_documents(&input[..], DocumentFormat::Json).unwrap();

        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0], Data::from(json!({"a": 1})));
        assert_eq!(docs[2], Data::from("c"));
    }

    #[test]
    fn test_read_yaml_documents() {
        let input = "first: 1\n---\n- second\n";
        let docs = read_documents(input.as_bytes(), DocumentFormat::Yaml).unwrap();

        assert_eq!(docs, vec![Data::from(json!({"first": 1})), Data::from(json!(["second"]))]);
    }

    #[test]
    fn test_read_reports_malformed_json() {
        let result = read_documents(&b"{\"a\": "[..], DocumentFormat::Json);
        assert!(matches!(result, Err(DocumentError::JsonError(_))));
    }

    #[test]
    fn test_empty_input_holds_no_documents() {
        for format in [DocumentFormat::Json, DocumentFormat::Ndjson, DocumentFormat::Yaml] {
            assert_eq!(read_documents(&b""[..], format).unwrap(), Vec::<Data>::new());
            assert_eq!(read_documents(&b"  \n\n"[..], format).unwrap(), Vec::<Data>::new());
        }
    }

    #[test]
    fn test_write_ndjson_ignores_pretty() {
        let mut buf = Vec::new();
        let docs = vec![Data::from(json!({"name": "Alice"})), Data::from(json!({"name": "Bob"}))];
        write_documents(&mut buf, &docs, DocumentFormat::Ndjson, true).unwrap();

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines, vec![r#"{"name":"Alice"}"#, r#"{"name":"Bob"}"#]);
    }

    #[test]
    fn test_write_pretty_json() {
        let mut buf = Vec::new();
        write_documents(&mut buf, &[Data::from(json!({"k": [1]}))], DocumentFormat::Json, true).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output, "{\n  \"k\": [\n    1\n  ]\n}\n");
    }

    #[test]
    fn test_write_yaml_separates_documents() {
        let mut buf = Vec::new();
        let docs = vec![Data::from(json!({"a": "x"})), Data::from(json!({"b": "y"}))];
        write_documents(&mut buf, &docs, DocumentFormat::Yaml, false).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output, "a: x\n---\nb: y\n");
        assert_eq!(read_documents(output.as_bytes(), DocumentFormat::Yaml).unwrap(), docs);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("YML".parse::<DocumentFormat>().unwrap(), DocumentFormat::Yaml);
        assert_eq!("jsonl".parse::<DocumentFormat>().unwrap(), DocumentFormat::Ndjson);
        assert!(matches!(
            "toml".parse::<DocumentFormat>(),
            Err(DocumentError::UnknownFormat(_))
        ));

        assert_eq!(DocumentFormat::from_path(Path::new("in.json")), Some(DocumentFormat::Json));
        assert_eq!(DocumentFormat::from_path(Path::new("events.NDJSON")), Some(DocumentFormat::Ndjson));
        assert_eq!(DocumentFormat::from_path(Path::new("values.yml")), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::from_path(Path::new("README")), None);
    }
}
