//! # verdict-parser
//!
//! Parsing for decision records and their index:
//! - **header**: YAML front matter between `---` delimiters
//! - **mask**: fenced-block and inline-code masking that preserves offsets
//! - **sections**: `## <Name>` section scanning over masked text
//! - **index**: two-line index entries with free-text annotations
//! - **xref**: `<PREFIX>-<NUMBER>` cross-reference tokens
//! - **record**: combines the above into a `Record`
//!
//! Every function here is pure over its input text. File IO lives in
//! `verdict-engine`.

pub mod error;
pub mod header;
pub mod index;
pub mod lines;
pub mod mask;
pub mod record;
pub mod sections;
pub mod xref;

pub use error::ParseError;
pub use header::{HeaderRegion, ParsedHeader, find_field_line, locate_header, parse_header};
pub use index::{escape_title, link_destination, parse_index};
pub use mask::{mask_for_references, mask_inline_code, mask_literal_blocks};
pub use record::build_record;
pub use sections::{
    TitleHeading, fold_title, scan_sections, section_marker, split_title_token, title_headings,
    visible_title,
};
pub use xref::{CrossReference, ReferenceScanner, normalize_separators};
