//! XML → documentation model
//!
//! The reader walks a parsed `roxmltree` document and builds the
//! [model](crate::model). Each known element has one construction rule; the
//! rules read children in source order and never reorder or deduplicate them.
//!
//!     <doc>                         DocRoot::File
//!       <assembly><name/></assembly>
//!       <members>
//!         <member name="T:...">     DocRoot::Member when it is the root
//!           <summary/> <remarks/> <returns/> <value/> <example/>
//!           <param name/> <typeparam name/> <exception cref/> <seealso cref|href/>
//!
//! Section content follows the text grammar in [`text`]. Elements outside the
//! grammar are kept as [`UnrecognizedElement`](crate::model::UnrecognizedElement)s.
//!
//! Structural errors come from the [access layer](crate::xml::access) and abort
//! the whole read: a malformed document produces an error and no model.

mod member;
mod text;

pub use member::{read_documentation_file, read_member};
pub use text::read_text_block;

use crate::error::ReadError;
use crate::model::DocRoot;
use crate::xml::{ensure_name_is, require_root_element};
use roxmltree::Document;

/// Parses XML text and reads it as documentation.
pub fn read_str(source: &str) -> Result<DocRoot, ReadError> {
    let doc = Document::parse(source).map_err(|e| ReadError::Xml {
        message: e.to_string(),
    })?;
    read_document(&doc)
}

/// Reads a parsed document whose root is either `<doc>` or a single `<member>`.
pub fn read_document(document: &Document<'_>) -> Result<DocRoot, ReadError> {
    let root = require_root_element(document)?;
    ensure_name_is(root, &["doc", "member"])?;

    if root.tag_name().name() == "doc" {
        read_documentation_file(root).map(DocRoot::File)
    } else {
        read_member(root).map(DocRoot::Member)
    }
}
