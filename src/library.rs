//! Lab 2: a sequential book catalog keyed by integer ids.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LabError, Result};

/// The two-record catalog every demo starts from.
pub const BOOKS_DATABASE: &str = include_str!("../data/books_database.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    pub id: u64,
    pub name: String,
    pub pages: u32,
}

impl Book {
    pub fn new(id: u64, name: impl Into<String>, pages: u32) -> Self {
        Self {
            id,
            name: name.into(),
            pages,
        }
    }

    /// Text naming every field needed to rebuild an identical record.
    pub fn repr(&self) -> String {
        format!(
            "Book(id={}, name={:?}, pages={})",
            self.id, self.name, self.pages
        )
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book \"{}\"", self.name)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    books: Vec<Book>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json(BOOKS_DATABASE)
    }

    /// Accepts either a bare array of books or an object with a `books` array.
    pub fn from_json(content: &str) -> Result<Self> {
        let books = if content.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<Book>>(content)?
        } else {
            serde_json::from_str::<CatalogFile>(content)?.books
        };
        Ok(Self::new(books))
    }

    /// Expects a `[[books]]` array of tables.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self::new(file.books))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| LabError::Load(format!("{}: {err}", path.display())))?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let library = match format.as_deref() {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            _ => {
                let trimmed = content.trim_start();
                if trimmed.starts_with('{') || (trimmed.starts_with('[') && !trimmed.starts_with("[[")) {
                    Self::from_json(&content)
                } else {
                    Self::from_toml(&content)
                }
            }
        }?;

        tracing::info!(path = %path.display(), books = library.len(), "catalog loaded");
        Ok(library)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// One past the id of the last record, not the largest id.
    pub fn get_next_book_id(&self) -> Result<u64> {
        match self.books.last() {
            Some(book) => book
                .id
                .checked_add(1)
                .ok_or_else(|| LabError::invalid_value("id", book.id, "catalog ids exhausted")),
            None => Ok(1),
        }
    }

    pub fn get_index_by_book_id(&self, book_id: u64) -> Result<usize> {
        self.books
            .iter()
            .position(|book| book.id == book_id)
            .ok_or_else(|| {
                tracing::warn!(book_id, "book id not in catalog");
                LabError::BookNotFound(book_id)
            })
    }

    pub fn get_book(&self, book_id: u64) -> Result<&Book> {
        let index = self.get_index_by_book_id(book_id)?;
        Ok(&self.books[index])
    }

    /// Appends a record under the next id and returns that id.
    pub fn add_book(&mut self, name: impl Into<String>, pages: u32) -> Result<u64> {
        let id = self.get_next_book_id()?;
        let book = Book::new(id, name, pages);
        tracing::debug!(id, name = %book.name, "book added");
        self.books.push(book);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn sample_library() -> Library {
        Library::bundled().unwrap()
    }

    #[test]
    fn test_bundled_database() {
        let library = sample_library();
        assert_eq!(library.len(), 2);
        assert_eq!(library.books()[0], Book::new(1, "test_name_1", 200));
        assert_eq!(library.books()[1], Book::new(2, "test_name_2", 400));
    }

    #[test]
    fn test_next_id_empty() {
        let library = Library::default();
        assert!(library.is_empty());
        assert_eq!(library.get_next_book_id().unwrap(), 1);
    }

    #[test]
    fn test_next_id_follows_last_record() {
        assert_eq!(sample_library().get_next_book_id().unwrap(), 3);

        let unordered = Library::new(vec![Book::new(10, "a", 1), Book::new(4, "b", 1)]);
        assert_eq!(unordered.get_next_book_id().unwrap(), 5);
    }

    #[test]
    fn test_next_id_exhausted() {
        let mut library = Library::from_json(r#"[{"id": 18446744073709551615, "name": "x", "pages": 1}]"#)
            .unwrap();
        let err = library.get_next_book_id().unwrap_err();
        assert!(err.is_value_error());
        assert!(err.to_string().contains("catalog ids exhausted"));

        assert!(library.add_book("overflow", 10).is_err());
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_index_by_id() {
        let library = sample_library();
        assert_eq!(library.get_index_by_book_id(1).unwrap(), 0);
        assert_eq!(library.get_index_by_book_id(2).unwrap(), 1);
        assert_eq!(
            library.get_index_by_book_id(99).unwrap_err(),
            LabError::BookNotFound(99)
        );
        assert_eq!(
            Library::default().get_index_by_book_id(1).unwrap_err(),
            LabError::BookNotFound(1)
        );
    }

    #[test]
    fn test_add_and_get_book() {
        let mut library = sample_library();
        let id = library.add_book("Dune", 612).unwrap();
        assert_eq!(id, 3);
        assert_eq!(library.get_book(3).unwrap().name, "Dune");
        assert_eq!(library.get_next_book_id().unwrap(), 4);

        let mut empty = Library::default();
        assert_eq!(empty.add_book("First", 10).unwrap(), 1);
    }

    #[test]
    fn test_book_formatting() {
        let book = Book::new(1, "test_name_1", 200);
        assert_eq!(book.to_string(), "Book \"test_name_1\"");
        assert_eq!(book.repr(), r#"Book(id=1, name="test_name_1", pages=200)"#);
    }

    #[test]
    fn test_book_repr_escapes_quotes() {
        let book = Book::new(4, "O'Brien says \"hi\"", 12);
        assert_eq!(book.repr(), r#"Book(id=4, name="O'Brien says \"hi\"", pages=12)"#);
    }

    #[test]
    fn test_from_json_object_form() {
        let library =
            Library::from_json(r#"{"books": [{"id": 7, "name": "x", "pages": 1}]}"#).unwrap();
        assert_eq!(library.get_next_book_id().unwrap(), 8);
    }

    #[test]
    fn test_misspelled_catalog_key_is_rejected() {
        let err = Library::from_json(r#"{"bookz": [{"id": 1, "name": "x", "pages": 1}]}"#).unwrap_err();
        assert!(matches!(err, LabError::Load(ref msg) if msg.contains("bookz")));

        let err = Library::from_toml("[[book]]\nid = 1\nname = \"x\"\npages = 1").unwrap_err();
        assert!(matches!(err, LabError::Load(_)));

        let err = Library::from_json(r#"[{"id": 1, "title": "x", "pages": 1}]"#).unwrap_err();
        assert!(matches!(err, LabError::Load(ref msg) if msg.contains("title")));
    }

    #[test]
    fn test_bad_record_reports_location() {
        let content = "[\n  {\"id\": 1, \"name\": \"a\", \"pages\": 10},\n  {\"id\": 2, \"name\": \"b\", \"pages\": -4}\n]";
        let err = Library::from_json(content).unwrap_err();
        assert!(matches!(err, LabError::Load(ref msg) if msg.starts_with("line 3, column")));
    }

    #[test]
    fn test_from_json_rejects_bad_records() {
        let err = Library::from_json(r#"[{"id": 1, "name": "x", "pages": -4}]"#).unwrap_err();
        assert!(matches!(err, LabError::Load(_)));
    }

    #[test]
    fn test_toml_and_json_files_agree() {
        let mut json_file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(json_file, "{BOOKS_DATABASE}").unwrap();

        let mut toml_file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            toml_file,
            "[[books]]\nid = 1\nname = \"test_name_1\"\npages = 200\n\n\
             [[books]]\nid = 2\nname = \"test_name_2\"\npages = 400"
        )
        .unwrap();

        let from_json = Library::from_path(json_file.path()).unwrap();
        let from_toml = Library::from_path(toml_file.path()).unwrap();
        assert_eq!(from_json, from_toml);
    }

    #[test]
    fn test_from_path_sniffs_format() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[books]]\nid = 5\nname = \"sniffed\"\npages = 9").unwrap();
        let library = Library::from_path(file.path()).unwrap();
        assert_eq!(library.get_index_by_book_id(5).unwrap(), 0);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Library::from_path(Path::new("/nonexistent/books.json")).unwrap_err();
        assert!(matches!(err, LabError::Load(_)));
    }
}
