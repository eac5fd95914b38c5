//! Markdown status report parsing.
//!
//! The input format is line-oriented: first-level headings (`# Name #`)
//! select a category, second-level headings (`## Title`) introduce
//! projects, `Contact:`/`Link:`/`Sponsor:` lines carry metadata, and
//! everything else is body content made of paragraphs and `-`/`*`
//! bulleted lists.
//!
//! - [`reader`]: the single-pass line state machine building a
//!   [`Report`](crate::report::Report)
//! - [`meta`]: parsing of the metadata line forms

mod meta;
mod reader;

pub use reader::{read_markdown, read_markdown_from_reader};
