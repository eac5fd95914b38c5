//! # md2report
//!
//! Converts quarterly status reports written in a constrained,
//! line-oriented markdown dialect into the XML document format consumed
//! by the documentation build pipeline.
//!
//! ## Quick start
//!
//! ```no_run
//! use md2report::{read_markdown, write_xml};
//!
//! let report = read_markdown("2026q2.md")?;
//! write_xml(&report, "2026q2.xml")?;
//! # Ok::<(), md2report::Error>(())
//! ```
//!
//! ## Working with reports
//!
//! The [`Report`] struct is the central data type: the markdown reader
//! builds it from input lines, and the XML writer renders it. Each
//! [`Project`] carries its category, title, contacts, links, sponsors,
//! and body blocks.
//!
//! The conversion is a single forward pass over the input with no
//! lookahead; an unrecognized first-level heading aborts it with
//! [`Error::UnknownCategory`].

pub mod error;
pub mod markdown;
pub mod report;
pub mod xml;

pub use error::{Error, Result};
pub use markdown::{read_markdown, read_markdown_from_reader};
pub use report::{Block, Category, Contact, Link, ListItem, Project, Report};
pub use xml::{render_xml, write_xml, write_xml_to_writer};
