//! Markdown status report reader.
//!
//! One forward pass over the input lines with no lookahead. Each line is
//! classified as a category heading, a project heading, a metadata line,
//! or body content; the block engine tracks at most one open paragraph or
//! list at a time.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::report::{Block, Category, Contact, Link, ListItem, Project, Report};

use super::meta::{parse_contact, parse_link};

/// Read a markdown status report from disk.
///
/// # Example
///
/// ```no_run
/// use md2report::read_markdown;
///
/// let report = read_markdown("2026q2.md")?;
/// println!("{} projects", report.projects.len());
/// # Ok::<(), md2report::Error>(())
/// ```
pub fn read_markdown<P: AsRef<Path>>(path: P) -> Result<Report> {
    let file = File::open(path)?;
    read_markdown_from_reader(BufReader::new(file))
}

/// Read a markdown status report from any [`BufRead`] source.
///
/// Useful for converting standard input or in-memory buffers.
pub fn read_markdown_from_reader<R: BufRead>(reader: R) -> Result<Report> {
    let mut parser = Parser::new();
    for line in reader.lines() {
        parser.line(line?.trim_end())?;
    }
    Ok(parser.finish())
}

/// The open block of the project under construction.
#[derive(Debug)]
enum OpenBlock {
    None,
    Paragraph(Vec<String>),
    List(Vec<ListItem>),
}

/// Parser state for one conversion run. One instance per call, never
/// reused.
#[derive(Debug)]
struct Parser {
    category: Category,
    projects: Vec<Project>,
    current: Option<Project>,
    /// Closed blocks of the current project.
    body: Vec<Block>,
    block: OpenBlock,
    body_open: bool,
    /// Metadata accumulated before the body opens.
    contacts: Vec<Contact>,
    links: Vec<Link>,
    /// Sponsors accumulate until the project closes.
    sponsors: Vec<String>,
}

impl Parser {
    fn new() -> Self {
        Self {
            category: Category::Unknown,
            projects: Vec::new(),
            current: None,
            body: Vec::new(),
            block: OpenBlock::None,
            body_open: false,
            contacts: Vec::new(),
            links: Vec::new(),
            sponsors: Vec::new(),
        }
    }

    /// Consume one right-trimmed input line.
    fn line(&mut self, line: &str) -> Result<()> {
        if let Some(category) = Category::from_heading(line) {
            self.category = category;
            return Ok(());
        }
        if line.starts_with("# ") {
            return Err(Error::UnknownCategory(line.to_string()));
        }

        if let Some(title) = line.strip_prefix("## ") {
            self.close_project();
            self.current = Some(Project::new(self.category, title.trim_matches(['#', ' '])));
            return Ok(());
        }

        if let Some(rest) = line.strip_prefix("Contact:") {
            // Consumed even after the body opened, so it never becomes
            // content; late contacts are dropped.
            if !self.body_open {
                self.contacts.push(parse_contact(rest));
            }
            return Ok(());
        }
        if let Some(rest) = line.strip_prefix("Link:") {
            if !self.body_open {
                self.links.push(parse_link(rest));
            }
            return Ok(());
        }
        if let Some(rest) = line.strip_prefix("Sponsor:") {
            self.sponsors.push(rest.trim().to_string());
            return Ok(());
        }

        // Blank lines never open a body.
        if line.is_empty() && !self.body_open {
            return Ok(());
        }
        // Content outside any project is consumed without output.
        if self.current.is_none() {
            return Ok(());
        }

        self.open_body();
        self.content_line(line);
        Ok(())
    }

    /// Flush accumulated contacts and links into the project the first
    /// time actual content appears.
    fn open_body(&mut self) {
        if self.body_open {
            return;
        }
        if let Some(project) = self.current.as_mut() {
            project.contacts = std::mem::take(&mut self.contacts);
            project.links = std::mem::take(&mut self.links);
        }
        self.body_open = true;
    }

    /// Feed one content line to the block engine.
    fn content_line(&mut self, line: &str) {
        // List markers may be indented; the check ignores surrounding
        // whitespace.
        let trimmed = line.trim();
        if trimmed.starts_with('-') || trimmed.starts_with('*') {
            let text = line.trim_start_matches(['*', '-', ' ']);
            self.close_paragraph();
            match &mut self.block {
                OpenBlock::List(items) => items.push(ListItem::new(text)),
                _ => self.block = OpenBlock::List(vec![ListItem::new(text)]),
            }
            return;
        }

        if line.is_empty() {
            // A blank line ends a paragraph; an open list is unaffected.
            self.close_paragraph();
            return;
        }

        if !line.starts_with(' ') && matches!(self.block, OpenBlock::List(_)) {
            // A non-indented line ends the list and is reprocessed as
            // fresh content below.
            self.close_block();
        }

        // Third-level headings are plain paragraph text.
        let text = match line.strip_prefix("###") {
            Some(rest) => rest.trim_start_matches('#').trim_start(),
            None => line,
        };

        match &mut self.block {
            OpenBlock::List(items) => {
                if let Some(item) = items.last_mut() {
                    item.runs.push(text.to_string());
                }
            }
            OpenBlock::Paragraph(runs) => runs.push(text.to_string()),
            OpenBlock::None => self.block = OpenBlock::Paragraph(vec![text.to_string()]),
        }
    }

    fn close_paragraph(&mut self) {
        if matches!(self.block, OpenBlock::Paragraph(_)) {
            self.close_block();
        }
    }

    fn close_block(&mut self) {
        match std::mem::replace(&mut self.block, OpenBlock::None) {
            OpenBlock::None => {}
            OpenBlock::Paragraph(runs) => self.body.push(Block::Paragraph(runs)),
            OpenBlock::List(items) => self.body.push(Block::List(items)),
        }
    }

    /// Close the current project: paragraph, then list, then body, append
    /// sponsors, and clear all pending metadata.
    fn close_project(&mut self) {
        self.close_block();
        if let Some(mut project) = self.current.take() {
            project.body = std::mem::take(&mut self.body);
            project.sponsors = std::mem::take(&mut self.sponsors);
            self.projects.push(project);
        }
        self.contacts.clear();
        self.links.clear();
        self.sponsors.clear();
        self.body_open = false;
    }

    /// Run the closing sequence once more at end of input.
    fn finish(mut self) -> Report {
        self.close_project();
        Report {
            projects: self.projects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Report {
        read_markdown_from_reader(input.as_bytes()).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let report = parse("");
        assert!(report.projects.is_empty());
    }

    #[test]
    fn test_no_project_headings() {
        // Stray content without a project heading is consumed silently.
        let report = parse("Contact: a@b.org\n\nsome stray text\n");
        assert!(report.projects.is_empty());
    }

    #[test]
    fn test_category_persists_across_projects() {
        let report = parse("# Ports #\n\n## A\n\ntext\n\n## B\n\ntext\n");
        assert_eq!(report.projects.len(), 2);
        assert_eq!(report.projects[0].category, Category::Ports);
        assert_eq!(report.projects[1].category, Category::Ports);
    }

    #[test]
    fn test_category_defaults_to_unknown() {
        let report = parse("## Early Bird\n\ntext\n");
        assert_eq!(report.projects[0].category, Category::Unknown);
    }

    #[test]
    fn test_all_recognized_categories() {
        for (heading, category) in [
            ("# FreeBSD Team Reports #", Category::Team),
            ("# Projects #", Category::Proj),
            ("# Kernel Projects #", Category::Kern),
            ("# Architectures #", Category::Arch),
            ("# Ports #", Category::Ports),
            ("# Documentation #", Category::Doc),
            ("# Third-Party Projects #", Category::Third),
        ] {
            let report = parse(&format!("{heading}\n\n## P\n"));
            assert_eq!(report.projects[0].category, category, "{heading}");
        }
    }

    #[test]
    fn test_unknown_category_heading_is_fatal() {
        let result = read_markdown_from_reader("# Bogus #\n## Never parsed\n".as_bytes());
        match result {
            Err(Error::UnknownCategory(line)) => assert_eq!(line, "# Bogus #"),
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_title_strips_markers_and_whitespace() {
        let report = parse("## Shiny Project ##\n");
        assert_eq!(report.projects[0].title, "Shiny Project");
    }

    #[test]
    fn test_consecutive_headings_give_metadata_only_record() {
        let report = parse("## Title A\n## Title B\n\nbody of b\n");
        assert_eq!(report.projects.len(), 2);
        let first = &report.projects[0];
        assert!(first.body.is_empty());
        assert!(first.sponsors.is_empty());
        assert_eq!(report.projects[1].body.len(), 1);
    }

    #[test]
    fn test_contacts_and_links_attach_at_body_open() {
        let report = parse(
            "## P\n\nContact: Jane Doe <jane@example.org>\nLink: [Ex](http://example.org)\n\nbody text\n",
        );
        let project = &report.projects[0];
        assert_eq!(project.contacts.len(), 1);
        assert_eq!(project.contacts[0].name, "Jane Doe");
        assert_eq!(project.links.len(), 1);
        assert_eq!(project.links[0].href, "http://example.org");
    }

    #[test]
    fn test_contacts_without_body_are_dropped() {
        let report = parse("## P\n\nContact: Jane <jane@example.org>\n\n## Q\n\ntext\n");
        assert!(report.projects[0].contacts.is_empty());
        assert!(report.projects[0].body.is_empty());
    }

    #[test]
    fn test_late_contact_is_consumed_not_content() {
        let report = parse("## P\n\nfirst paragraph\n\nContact: late@example.org\n");
        let project = &report.projects[0];
        assert!(project.contacts.is_empty());
        assert_eq!(project.body.len(), 1);
    }

    #[test]
    fn test_sponsor_collected_until_project_close() {
        let report = parse("## P\n\nbody text\n\nSponsor: The Foundation\n");
        assert_eq!(report.projects[0].sponsors, vec!["The Foundation"]);
    }

    #[test]
    fn test_sponsors_do_not_leak_across_projects() {
        let report = parse("## P\nSponsor: One\n## Q\n\ntext\n");
        assert_eq!(report.projects[0].sponsors, vec!["One"]);
        assert!(report.projects[1].sponsors.is_empty());
    }

    #[test]
    fn test_paragraph_runs_one_per_line() {
        let report = parse("## P\n\nline one\nline two\n");
        assert_eq!(
            report.projects[0].body,
            vec![Block::Paragraph(vec![
                "line one".to_string(),
                "line two".to_string()
            ])]
        );
    }

    #[test]
    fn test_blank_line_splits_paragraphs() {
        let report = parse("## P\n\none\n\ntwo\n");
        assert_eq!(report.projects[0].body.len(), 2);
    }

    #[test]
    fn test_list_item_continuation() {
        let report = parse("## P\n\n- first item\n  second item continuation\n");
        let Block::List(items) = &report.projects[0].body[0] else {
            panic!("expected list");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].runs, vec!["first item", "second item continuation"]);
    }

    #[test]
    fn test_list_closed_by_non_indented_line() {
        let report = parse("## P\n\n- item\n\nnew paragraph\n");
        let body = &report.projects[0].body;
        assert_eq!(body.len(), 2);
        assert!(matches!(body[0], Block::List(_)));
        assert_eq!(body[1], Block::Paragraph(vec!["new paragraph".to_string()]));
    }

    #[test]
    fn test_blank_line_inside_list_is_ignored() {
        let report = parse("## P\n\n- one\n\n- two\n");
        let Block::List(items) = &report.projects[0].body[0] else {
            panic!("expected list");
        };
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_star_marker_and_interrupting_paragraph() {
        let report = parse("## P\n\nintro text\n* bullet\n");
        let body = &report.projects[0].body;
        assert_eq!(body[0], Block::Paragraph(vec!["intro text".to_string()]));
        assert!(matches!(body[1], Block::List(_)));
    }

    #[test]
    fn test_tab_indent_does_not_continue_list() {
        // Indentation is judged by a leading space only.
        let report = parse("## P\n\n- item\n\tnot a continuation\n");
        let body = &report.projects[0].body;
        assert_eq!(body.len(), 2);
        assert_eq!(
            body[1],
            Block::Paragraph(vec!["\tnot a continuation".to_string()])
        );
    }

    #[test]
    fn test_third_level_heading_is_paragraph_text() {
        let report = parse("## P\n\n### Status\n");
        assert_eq!(
            report.projects[0].body,
            vec![Block::Paragraph(vec!["Status".to_string()])]
        );
    }

    #[test]
    fn test_final_project_closed_at_end_of_input() {
        let report = parse("## P\n\n- item one\n- item two");
        let Block::List(items) = &report.projects[0].body[0] else {
            panic!("expected list");
        };
        assert_eq!(items.len(), 2);
    }
}
