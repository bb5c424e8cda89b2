//! XML documentation comments to Markdown
//!
//!     This crate reads the XML documentation file a compiler emits next to an assembly
//!     (`<doc><members><member name="T:...">...`) into a typed model, and renders that model
//!     as Markdown.
//!
//!     It is a pure lib: it powers docmark-cli but never prints, reads files or looks at the
//!     environment. Input is a string or a parsed roxmltree document, output is a model, a
//!     Markdown tree or Markdown text.
//!
//! Architecture
//!
//!     raw XML ──roxmltree──▶ reader ──▶ model ──▶ convert ──▶ markdown ──comrak──▶ text
//!
//!     .
//!     ├── error.rs            # ReadError, ConvertError, DocmarkError
//!     ├── xml
//!     │   ├── access.rs       # require_* helpers with positioned errors
//!     │   └── fragment.rs     # owned, comparable XML subtrees
//!     ├── model               # node types, MemberId, visitor trait
//!     ├── reader              # one construction rule per element
//!     ├── convert
//!     │   ├── block.rs        # BlockVisitor
//!     │   ├── span.rs         # SpanVisitor
//!     │   ├── options.rs
//!     │   └── registry.rs     # per-kind renderer overrides
//!     └── markdown            # MdBlock / MdSpan and the comrak serializer
//!
//! Reading
//!
//!     The reader is strict about structure and lenient about content. A `<param>` without a
//!     name, a `<see>` without a target or a `<list type="grid">` aborts the read with an error
//!     that names the element and its line and column. Elements the reader does not know are
//!     kept, verbatim, as UnrecognizedElement nodes so nothing in the source is lost.
//!
//! Converting
//!
//!     Conversion is double dispatch: every node accepts a DocVisitor and calls the method for
//!     its own kind. BlockVisitor produces blocks (headings, paragraphs, lists, tables, code),
//!     SpanVisitor produces inline content and refuses block-only nodes. Both go back through
//!     MarkdownConverter for every child so a renderer registered for a kind applies at any
//!     depth.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs
//!     ├── reader
//!     ├── convert
//!     └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so lib.rs includes
//!     them as modules.

pub mod convert;
pub mod error;
pub mod markdown;
pub mod model;
pub mod reader;
pub mod xml;

pub use convert::{ConvertOptions, CrossRefStyle, MarkdownConverter, UnrecognizedPolicy};
pub use error::{ConvertError, DocmarkError, ReadError};
pub use markdown::{MdBlock, MdSpan};
pub use model::DocRoot;
pub use reader::read_str;

/// Reads XML documentation and renders it with `converter`.
pub fn to_markdown(source: &str, converter: &MarkdownConverter) -> Result<String, DocmarkError> {
    let root = read_str(source)?;
    Ok(converter.convert_to_markdown(&root)?)
}
