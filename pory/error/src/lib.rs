//! Error handling for the poryscript ast
//!
//! The ast itself is inert data, so the only errors are construction mistakes
//! and the label collisions that collaborators may want to report.
//! Every error can be rendered as a rust-style snippet using the `annotate_snippets` library.
use annotate_snippets::display_list::DisplayList;
use pory_common::InputFiles;

pub use ast_error::{AstError, LabelKind};
pub use snippet::{AnnotationOwned, SliceOwned, SnippetOwned, SourceAnnotationOwned};

mod ast_error;
mod snippet;

/// Used to determine whether the error messages should use console colors
/// Or be plain text
pub const COLORED: bool = cfg!(feature = "colored_errors");

/// The result type used by the fallible ast constructors
pub type Result<T> = std::result::Result<T, AstError>;

pub trait AsAnnotationSnippet<'a> {
    fn as_annotation_snippet(&self, files: &'a InputFiles) -> SnippetOwned<'a>;

    /// Renders this error, using colors if `colored_errors` is enabled
    fn format(&self, files: &'a InputFiles) -> String {
        self.render(files, COLORED)
    }

    fn render(&self, files: &'a InputFiles, color: bool) -> String {
        let snippet = self.as_annotation_snippet(files);
        let display_list = DisplayList::from(snippet.as_snippet(files, color));
        display_list.to_string()
    }
}
