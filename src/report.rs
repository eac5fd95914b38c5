//! Central report model.
//!
//! Format-agnostic structure that the markdown reader builds and the XML
//! writer renders. Entities are transient, scoped to one conversion run.

/// Top-level grouping applied to every project declared under a given
/// first-level heading until the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    Team,
    Proj,
    Kern,
    Arch,
    Bin,
    Ports,
    Doc,
    Misc,
    Third,
    /// Sentinel for projects declared before any category heading.
    #[default]
    Unknown,
}

impl Category {
    /// Map a first-level heading line to its category.
    ///
    /// `Bin` and `Misc` are part of the document schema but have no heading
    /// form; they are populated by other processes, never by this reader.
    pub fn from_heading(line: &str) -> Option<Category> {
        match line {
            "# FreeBSD Team Reports #" => Some(Category::Team),
            "# Projects #" => Some(Category::Proj),
            "# Kernel Projects #" => Some(Category::Kern),
            "# Architectures #" => Some(Category::Arch),
            "# Ports #" => Some(Category::Ports),
            "# Documentation #" => Some(Category::Doc),
            "# Third-Party Projects #" => Some(Category::Third),
            _ => None,
        }
    }

    /// The value of the `cat` attribute in the emitted XML.
    pub fn name(self) -> &'static str {
        match self {
            Category::Team => "team",
            Category::Proj => "proj",
            Category::Kern => "kern",
            Category::Arch => "arch",
            Category::Bin => "bin",
            Category::Ports => "ports",
            Category::Doc => "doc",
            Category::Misc => "misc",
            Category::Third => "third",
            Category::Unknown => "unknown",
        }
    }
}

/// A (display name, email address) pair from a `Contact:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

/// A (display name, URL) pair from a `Link:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub name: String,
    pub href: String,
}

/// One bullet of an unordered list. Each run is one source line, kept as a
/// distinct wrapped unit by the writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    pub runs: Vec<String>,
}

impl ListItem {
    pub fn new(first_run: impl Into<String>) -> Self {
        Self {
            runs: vec![first_run.into()],
        }
    }
}

/// Block-level body content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Free-form text, one run per source line.
    Paragraph(Vec<String>),
    /// Unordered list.
    List(Vec<ListItem>),
}

/// One reported unit of work.
#[derive(Debug, Clone)]
pub struct Project {
    pub category: Category,
    pub title: String,
    /// Attached when the body opens; a body-less project carries none.
    pub contacts: Vec<Contact>,
    pub links: Vec<Link>,
    pub sponsors: Vec<String>,
    pub body: Vec<Block>,
}

impl Project {
    pub fn new(category: Category, title: impl Into<String>) -> Self {
        Self {
            category,
            title: title.into(),
            contacts: Vec::new(),
            links: Vec::new(),
            sponsors: Vec::new(),
            body: Vec::new(),
        }
    }
}

/// A parsed status report: the ordered project records of one document.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub projects: Vec<Project>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }
}
