//! Page sources: where the page text of a document comes from.
//!
//! Two layouts are supported:
//!
//! - a JSON page dump, either `[{"page_number": 0, "text": "..."}, ...]` or
//!   `{"name": "...", "pages": [...]}`
//! - a page-text cache directory holding one `<name>.<page>.txt` file per page
//!
//! Sources only read text. [`load_pages`] also rejects documents that have
//! nothing to analyze.

use crate::error::{CliError, Result};
use distiller_domain::traits::PageSource;
use distiller_domain::Page;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct PageDump {
    page_number: u32,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DocumentDump {
    Pages(Vec<PageDump>),
    Named { name: Option<String>, pages: Vec<PageDump> },
}

/// A JSON page dump on disk
#[derive(Debug, Clone)]
pub struct JsonPageSource {
    path: PathBuf,
    name: String,
}

impl JsonPageSource {
    /// Create a source for a `.json` file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = file_stem(&path);
        Self { path, name }
    }
}

impl PageSource for JsonPageSource {
    type Error = CliError;

    fn document_name(&self) -> &str {
        &self.name
    }

    fn pages(&self) -> Result<Vec<Page>> {
        let contents = fs::read_to_string(&self.path)?;
        let dump: DocumentDump = serde_json::from_str(&contents)?;
        let pages = match dump {
            DocumentDump::Pages(pages) => pages,
            DocumentDump::Named { name, pages } => {
                if let Some(name) = name {
                    debug!("Page dump {} is named '{}'", self.path.display(), name);
                }
                pages
            }
        };
        Ok(pages
            .into_iter()
            .map(|p| Page::new(p.page_number, p.text))
            .collect())
    }
}

/// A directory of `<name>.<page>.txt` files
#[derive(Debug, Clone)]
pub struct TextDirSource {
    dir: PathBuf,
    name: String,
}

impl TextDirSource {
    /// Create a source for a cache directory, named after the directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());
        Self { dir, name }
    }
}

impl PageSource for TextDirSource {
    type Error = CliError;

    fn document_name(&self) -> &str {
        &self.name
    }

    fn pages(&self) -> Result<Vec<Page>> {
        let mut pages = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let Some(page_number) = cached_page_number(&path) else {
                continue;
            };
            let text = fs::read_to_string(&path)?;
            pages.push(Page::new(page_number, text));
        }
        pages.sort_by_key(|p| p.page_number());
        Ok(pages)
    }
}

/// Page number of a `<name>.<page>.txt` file name
fn cached_page_number(path: &Path) -> Option<u32> {
    if path.extension()? != "txt" {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let (_, page) = stem.rsplit_once('.')?;
    page.parse().ok()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Either kind of page source, chosen by the input path
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// JSON page dump
    Json(JsonPageSource),
    /// Page-text cache directory
    TextDir(TextDirSource),
}

impl DocumentSource {
    /// Pick the source for an input path
    pub fn open(path: &Path) -> Result<Self> {
        if path.is_dir() {
            Ok(DocumentSource::TextDir(TextDirSource::new(path)))
        } else if path.extension().is_some_and(|ext| ext == "json") {
            Ok(DocumentSource::Json(JsonPageSource::new(path)))
        } else {
            Err(CliError::InvalidInput(format!(
                "{} is neither a .json page dump nor a directory",
                path.display()
            )))
        }
    }

    /// Every document in a batch directory, sorted by path
    ///
    /// `.json` files and subdirectories are documents; anything else is
    /// ignored.
    pub fn discover(dir: &Path) -> Result<Vec<Self>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            paths.push(entry?.path());
        }
        paths.sort();
        Ok(paths
            .iter()
            .filter_map(|path| DocumentSource::open(path).ok())
            .collect())
    }
}

impl PageSource for DocumentSource {
    type Error = CliError;

    fn document_name(&self) -> &str {
        match self {
            DocumentSource::Json(source) => source.document_name(),
            DocumentSource::TextDir(source) => source.document_name(),
        }
    }

    fn pages(&self) -> Result<Vec<Page>> {
        match self {
            DocumentSource::Json(source) => source.pages(),
            DocumentSource::TextDir(source) => source.pages(),
        }
    }
}

/// Read a document's pages and check that there is something to analyze
pub fn load_pages<S>(source: &S) -> Result<Vec<Page>>
where
    S: PageSource<Error = CliError>,
{
    let name = source.document_name();
    let pages = source.pages()?;

    if pages.is_empty() {
        return Err(CliError::NotExtractable {
            document: name.to_string(),
            reason: "no pages".to_string(),
        });
    }

    let blank: Vec<u32> = pages
        .iter()
        .filter(|p| p.is_blank())
        .map(|p| p.page_number())
        .collect();
    if blank.len() == pages.len() {
        return Err(CliError::NotExtractable {
            document: name.to_string(),
            reason: "no page has text".to_string(),
        });
    }
    if !blank.is_empty() {
        warn!("{}: {} page(s) without text: {:?}", name, blank.len(), blank);
    }

    debug!("{}: loaded {} pages", name, pages.len());
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_json_array_dump() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, r#"[{"page_number": 0, "text": "Cover"}, {"page_number": 1}]"#).unwrap();

        let source = JsonPageSource::new(&path);
        assert_eq!(source.document_name(), "report");
        let pages = source.pages().unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].text(), "Cover");
        assert!(pages[1].is_blank());
    }

    #[test]
    fn test_json_named_dump() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, r#"{"name": "City 2019", "pages": [{"page_number": 4, "text": "x"}]}"#).unwrap();

        let pages = JsonPageSource::new(&path).pages().unwrap();
        assert_eq!(pages[0].page_number(), 4);
    }

    #[test]
    fn test_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(JsonPageSource::new(&path).pages(), Err(CliError::Serialization(_))));
    }

    #[test]
    fn test_text_dir_source() {
        let dir = TempDir::new().unwrap();
        let cache = dir.path().join("city2019");
        fs::create_dir(&cache).unwrap();
        fs::write(cache.join("city2019.10.txt"), "ten").unwrap();
        fs::write(cache.join("city2019.2.txt"), "two").unwrap();
        fs::write(cache.join("notes.txt"), "ignored").unwrap();
        fs::write(cache.join("city2019.3.pdf"), "ignored").unwrap();

        let source = TextDirSource::new(&cache);
        assert_eq!(source.document_name(), "city2019");
        let pages = source.pages().unwrap();
        let numbers: Vec<u32> = pages.iter().map(|p| p.page_number()).collect();
        assert_eq!(numbers, vec![2, 10]);
        assert_eq!(pages[1].text(), "ten");
    }

    #[test]
    fn test_precheck() {
        let dir = TempDir::new().unwrap();
        let empty = dir.path().join("empty.json");
        fs::write(&empty, "[]").unwrap();
        let blank = dir.path().join("blank.json");
        fs::write(&blank, r#"[{"page_number": 0, "text": "  \n"}]"#).unwrap();
        let good = dir.path().join("good.json");
        fs::write(&good, r#"[{"page_number": 0, "text": ""}, {"page_number": 1, "text": "x"}]"#).unwrap();

        assert!(matches!(
            load_pages(&JsonPageSource::new(&empty)),
            Err(CliError::NotExtractable { .. })
        ));
        assert!(matches!(
            load_pages(&JsonPageSource::new(&blank)),
            Err(CliError::NotExtractable { .. })
        ));
        assert_eq!(load_pages(&JsonPageSource::new(&good)).unwrap().len(), 2);
    }

    #[test]
    fn test_open_and_discover() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.json"), "[]").unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();

        assert!(DocumentSource::open(&dir.path().join("readme.md")).is_err());
        let names: Vec<String> = DocumentSource::discover(dir.path())
            .unwrap()
            .iter()
            .map(|s| s.document_name().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
