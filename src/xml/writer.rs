//! Status report XML writer.
//!
//! Renders a parsed [`Report`] into the report document dialect: a fixed
//! header with the predefined section and category descriptions, one
//! `<project>` record per parsed project, and a fixed footer. Emission is
//! plain string templating into one growable buffer.

use std::io::{self, Write};
use std::path::Path;

use crate::report::{Block, Project, Report};

use super::text::{content_run, escape_text};

/// Fixed document header: XML declaration, document type, date/section
/// boilerplate, and the predefined category descriptions. The `bin` and
/// `misc` categories have no markdown heading form; they are kept here
/// because they are part of the document schema.
const REPORT_HEADER: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<!DOCTYPE report PUBLIC "-//FreeBSD//DTD FreeBSD XML Database for
  Status Report//EN"
  "http://www.FreeBSD.org/XML/share/xml/statusreport.dtd" >

<!--
     Variables to replace:
     %%START%%     - report month start
     %%STOP%%      - report month end
     %%YEAR%%      - report year
     %%NUM%%       - report issue (first, second, third, fourth)
     %%STARTNEXT%% - report month start
     %%STOPNEXT%%  - report month end
     %%YEARNEXT%%  - next report due year (if different than %%YEAR%%)
     %%DUENEXT%%   - next report due date (i.e., June 6)
-->

<report>
  <date>
    <month>%%START%%-%%STOP%%</month>

    <year>%%YEAR%%</year>
  </date>

  <section>
    <title>Introduction</title>

    <p><strong>This is a draft of the %%START%%&ndash;%%STOP%% %%YEAR%%
      status report.  Please check back after it is finalized, and
      an announcement email is sent to the &os;-Announce mailing
      list.</strong></p>

    <?ignore
    <p>This report covers &os;-related projects between %%START%% and
      %%STOP%% %%YEAR%%.  This is the %%NUM%% of four reports planned for
      %%YEAR%%.</p>

    <p>The %%NUM%% quarter of %%YEAR%% was another productive quarter for
      the &os; project and community. [...]</p>

    <p>Thanks to all the reporters for the excellent work!</p>

    <p>The deadline for submissions covering the period from %%STARTNEXT%%
      to %%STOPNEXT%% %%YEARNEXT%% is %%DUENEXT%%, %%YEARNEXT%%.</p>
     ?>
  </section>

  <category>
    <name>team</name>

    <description>&os; Team Reports</description>

    <p>Entries from the various official and semi-official teams,
      as found in the <a href="&enbase;/administration.html">Administration
        Page</a>.</p>
  </category>

  <category>
    <name>proj</name>

    <description>Projects</description>

    <p>Projects that span multiple categories, from the kernel and userspace
      to the Ports Collection or external projects.</p>
  </category>

  <category>
    <name>kern</name>

    <description>Kernel</description>

    <p>Updates to kernel subsystems/features, driver support,
      filesystems, and more.</p>
  </category>

  <category>
    <name>arch</name>

    <description>Architectures</description>

    <p>Updating platform-specific features and bringing in support
      for new hardware platforms.</p>
  </category>

  <category>
    <name>bin</name>

    <description>Userland Programs</description>

    <p>Changes affecting the base system and programs in it.</p>
  </category>

  <category>
    <name>ports</name>

    <description>Ports</description>

    <p>Changes affecting the Ports Collection, whether sweeping
      changes that touch most of the tree, or individual ports
      themselves.</p>
  </category>

  <category>
    <name>doc</name>

    <description>Documentation</description>

    <p>Noteworthy changes in the documentation tree or new external
      books/documents.</p>
  </category>

  <category>
    <name>misc</name>

    <description>Miscellaneous</description>

    <p>Objects that defy categorization.</p>
  </category>

  <category>
    <name>third</name>

    <description>Third-Party Projects</description>

    <p>Many projects build upon &os; or incorporate components of
      &os; into their project.  As these projects may be of interest
      to the broader &os; community, we sometimes include brief
      updates submitted by these projects in our quarterly report.
      The &os; project makes no representation as to the accuracy or
      veracity of any claims in these submissions.</p>
  </category>

"#;

const REPORT_FOOTER: &str = "</report>\n";

/// Write a [`Report`] as status report XML to a file on disk.
///
/// # Example
///
/// ```no_run
/// use md2report::{read_markdown, write_xml};
///
/// let report = read_markdown("2026q2.md")?;
/// write_xml(&report, "2026q2.xml")?;
/// # Ok::<(), md2report::Error>(())
/// ```
pub fn write_xml<P: AsRef<Path>>(report: &Report, path: P) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_xml_to_writer(report, file)
}

/// Write a [`Report`] to any [`Write`] destination.
pub fn write_xml_to_writer<W: Write>(report: &Report, mut writer: W) -> io::Result<()> {
    writer.write_all(render_xml(report).as_bytes())
}

/// Render a [`Report`] to the complete XML document.
pub fn render_xml(report: &Report) -> String {
    let mut xml = String::with_capacity(REPORT_HEADER.len() + REPORT_FOOTER.len() + 1024);
    xml.push_str(REPORT_HEADER);
    for project in &report.projects {
        write_project(&mut xml, project);
    }
    xml.push_str(REPORT_FOOTER);
    xml
}

fn write_project(xml: &mut String, project: &Project) {
    xml.push_str(&format!(
        "  <project cat='{}'>\n    <title>{}</title>\n",
        project.category.name(),
        escape_text(&project.title)
    ));

    if !project.contacts.is_empty() {
        xml.push_str("\n    <contact>\n");
        for person in &project.contacts {
            xml.push_str(&format!(
                "      <person>\n        <name>{}</name>\n        <email>{}</email>\n      </person>\n",
                escape_text(&person.name),
                escape_text(&person.email)
            ));
        }
        xml.push_str("    </contact>\n");
    }

    if !project.links.is_empty() {
        xml.push_str("\n    <links>\n");
        for link in &project.links {
            xml.push_str(&format!(
                "      <url href=\"{}\">{}</url>\n",
                escape_text(&link.href),
                escape_text(&link.name)
            ));
        }
        xml.push_str("    </links>\n");
    }

    if !project.body.is_empty() {
        xml.push_str("\n    <body>\n");
        for (i, block) in project.body.iter().enumerate() {
            if i > 0 {
                xml.push('\n');
            }
            write_block(xml, block);
        }
        xml.push_str("    </body>\n");
    }

    if !project.sponsors.is_empty() {
        xml.push('\n');
        for sponsor in &project.sponsors {
            xml.push_str(&format!(
                "    <sponsor>{}</sponsor>\n",
                escape_text(sponsor)
            ));
        }
    }

    xml.push_str("  </project>\n\n");
}

fn write_block(xml: &mut String, block: &Block) {
    match block {
        Block::Paragraph(runs) => {
            xml.push_str(&format!("      <p>{}</p>\n", joined_runs(runs)));
        }
        Block::List(items) => {
            xml.push_str("      <ul>\n");
            for item in items {
                xml.push_str(&format!("        <li>{}</li>\n", joined_runs(&item.runs)));
            }
            xml.push_str("      </ul>\n");
        }
    }
}

/// Join the runs of a paragraph or list item, one wrapped unit per source
/// line.
fn joined_runs(runs: &[String]) -> String {
    runs.iter()
        .map(|run| content_run(run))
        .collect::<Vec<_>>()
        .join("\n\t")
}
