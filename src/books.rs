//! Lab 3: a base book with read-only fields and two validated formats.

use std::fmt;
use std::ops::Deref;

use serde_json::Value;

use crate::error::{LabError, Result};
use crate::validate;

// =============================================================================
// Milestone 1: Base book with read-only fields
// =============================================================================

/// Name and author are fixed at construction; there are no setters.
///
/// ```compile_fail
/// let mut book = oop_labs::books::Book::new("Dune", "Frank Herbert");
/// book.name = String::from("Children of Dune");
/// ```
///
/// ```compile_fail
/// let mut book = oop_labs::books::Book::new("Dune", "Frank Herbert");
/// book.author = String::from("Brian Herbert");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    name: String,
    author: String,
}

impl Book {
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book \"{}\" by {}", self.name, self.author)
    }
}

impl TryFrom<&Value> for Book {
    type Error = LabError;

    fn try_from(value: &Value) -> Result<Self> {
        Ok(Book::new(
            validate::string_field(value, "name")?,
            validate::string_field(value, "author")?,
        ))
    }
}

/// Shared view over every book format, so a mixed shelf can be listed.
pub trait BookFormat: fmt::Display + fmt::Debug {
    fn base(&self) -> &Book;
    fn format_label(&self) -> &'static str;

    /// Constructor-call text with the arguments that rebuild this book.
    fn repr(&self) -> String;
}

impl BookFormat for Book {
    fn base(&self) -> &Book {
        self
    }

    fn format_label(&self) -> &'static str {
        "book"
    }

    fn repr(&self) -> String {
        format!("Book(name={:?}, author={:?})", self.name, self.author)
    }
}

// =============================================================================
// Milestone 2: Paper and audio formats
// =============================================================================

/// Reads of the base fields go through `Deref`, writes do not.
///
/// ```compile_fail
/// let mut book = oop_labs::books::PaperBook::new("Dune", "Frank Herbert", 612).unwrap();
/// book.name = String::from("Dune Messiah");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PaperBook {
    book: Book,
    pages: u32,
}

impl PaperBook {
    pub fn new(name: impl Into<String>, author: impl Into<String>, pages: u32) -> Result<Self> {
        Ok(Self {
            book: Book::new(name, author),
            pages: validate::positive_integer("pages", pages.into())?,
        })
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn set_pages(&mut self, pages: u32) -> Result<()> {
        self.pages = validate::positive_integer("pages", pages.into())?;
        Ok(())
    }
}

impl Deref for PaperBook {
    type Target = Book;

    fn deref(&self) -> &Self::Target {
        &self.book
    }
}

impl fmt::Display for PaperBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. Pages: {}", self.book, self.pages)
    }
}

impl BookFormat for PaperBook {
    fn base(&self) -> &Book {
        &self.book
    }

    fn format_label(&self) -> &'static str {
        "paper"
    }

    fn repr(&self) -> String {
        format!(
            "PaperBook(name={:?}, author={:?}, pages={})",
            self.book.name, self.book.author, self.pages
        )
    }
}

impl TryFrom<&Value> for PaperBook {
    type Error = LabError;

    fn try_from(value: &Value) -> Result<Self> {
        let book = Book::try_from(value)?;
        let pages = validate::positive_integer("pages", validate::integer_field(value, "pages")?)?;
        Ok(Self { book, pages })
    }
}

/// Duration is measured in hours.
///
/// ```compile_fail
/// let mut book = oop_labs::books::AudioBook::new("Dune", "Frank Herbert", 21.5).unwrap();
/// book.author = String::from("Brian Herbert");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBook {
    book: Book,
    duration: f64,
}

impl AudioBook {
    pub fn new(name: impl Into<String>, author: impl Into<String>, duration: f64) -> Result<Self> {
        Ok(Self {
            book: Book::new(name, author),
            duration: validate::positive("duration", duration)?,
        })
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn set_duration(&mut self, duration: f64) -> Result<()> {
        self.duration = validate::positive("duration", duration)?;
        Ok(())
    }
}

impl Deref for AudioBook {
    type Target = Book;

    fn deref(&self) -> &Self::Target {
        &self.book
    }
}

impl fmt::Display for AudioBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. Duration: {} h", self.book, self.duration)
    }
}

impl BookFormat for AudioBook {
    fn base(&self) -> &Book {
        &self.book
    }

    fn format_label(&self) -> &'static str {
        "audio"
    }

    fn repr(&self) -> String {
        format!(
            "AudioBook(name={:?}, author={:?}, duration={:?})",
            self.book.name, self.book.author, self.duration
        )
    }
}

impl TryFrom<&Value> for AudioBook {
    type Error = LabError;

    fn try_from(value: &Value) -> Result<Self> {
        let book = Book::try_from(value)?;
        let duration = validate::positive("duration", validate::number_field(value, "duration")?)?;
        Ok(Self { book, duration })
    }
}

// =============================================================================
// Milestone 3: Mixed shelf
// =============================================================================

/// Builds the right format from a record's `format` tag (`paper`, `audio`,
/// or absent for a plain book).
pub fn shelf_entry(value: &Value) -> Result<Box<dyn BookFormat>> {
    let format = match validate::field(value, "format") {
        Ok(_) => validate::string_field(value, "format")?,
        Err(LabError::MissingField { .. }) => String::from("book"),
        Err(err) => return Err(err),
    };

    match format.as_str() {
        "book" => Ok(Box::new(Book::try_from(value)?)),
        "paper" => Ok(Box::new(PaperBook::try_from(value)?)),
        "audio" => Ok(Box::new(AudioBook::try_from(value)?)),
        other => Err(LabError::invalid_value(
            "format",
            other,
            "expected one of: book, paper, audio",
        )),
    }
}

pub fn describe_shelf(shelf: &[Box<dyn BookFormat>]) -> Vec<String> {
    shelf
        .iter()
        .map(|entry| format!("[{}] {}", entry.format_label(), entry))
        .collect()
}
