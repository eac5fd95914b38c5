//! Status report XML generation.
//!
//! - [`writer`]: renders a [`Report`](crate::report::Report) into the
//!   fixed report document dialect
//! - [`text`]: the per-run inline transform (escaping, inline links,
//!   reflow)

mod text;
mod writer;

pub use writer::{render_xml, write_xml, write_xml_to_writer};
