//! Owned variants of the `annotate_snippets` library structs
use std::borrow::Cow;

use annotate_snippets::{
    display_list::FormatOptions,
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};

use pory_common::{InputFiles, Span};

/// An owned counterpart to the `annotate_snippets::Snippet` struct
#[derive(Debug)]
pub struct SnippetOwned<'a> {
    pub title: Cow<'a, str>,
    pub id: Option<Cow<'a, str>>,
    pub annotation_type: AnnotationType,
    pub slices: Vec<SliceOwned<'a>>,
    pub footer: Vec<AnnotationOwned<'a>>,
}

/// An owned counterpart to the `annotate_snippets::Slice` struct
#[derive(Debug)]
pub struct SliceOwned<'a> {
    pub source: &'a str,
    pub origin: Option<&'a str>,
    pub annotations: Vec<SourceAnnotationOwned>,
}

/// An owned counterpart to the `annotate_snippets::Annotation` struct
#[derive(Debug)]
pub struct AnnotationOwned<'a> {
    pub id: Option<Cow<'a, str>>,
    pub label: Option<Cow<'a, str>>,
    pub annotation_type: AnnotationType,
}

/// An owned counterpart to the `annotate_snippets::SourceAnnotation` struct
///
/// The range is an absolute span, it gets resolved against the input files when rendering.
#[derive(Debug)]
pub struct SourceAnnotationOwned {
    pub annotation_type: AnnotationType,
    pub range: Span,
    pub label: String,
}

impl SnippetOwned<'_> {
    pub fn as_snippet(&self, input_files: &InputFiles, color: bool) -> Snippet<'_> {
        Snippet {
            title: Some(Annotation {
                annotation_type: self.annotation_type,
                id: self.id.as_deref(),
                label: Some(&self.title),
            }),
            slices: self
                .slices
                .iter()
                .map(|slice| slice.as_slice(input_files))
                .collect(),
            footer: self
                .footer
                .iter()
                .map(AnnotationOwned::as_annotation)
                .collect(),
            opt: FormatOptions {
                color,
                ..Default::default()
            },
        }
    }
}

impl SliceOwned<'_> {
    pub fn as_slice(&self, input_files: &InputFiles) -> Slice<'_> {
        Slice {
            source: self.source,
            line_start: 1,
            annotations: self
                .annotations
                .iter()
                .filter_map(|ann| ann.as_source_annotation(input_files))
                .collect(),
            origin: self.origin,
            fold: true,
        }
    }
}

impl AnnotationOwned<'_> {
    pub fn as_annotation(&self) -> Annotation<'_> {
        Annotation {
            annotation_type: self.annotation_type,
            id: self.id.as_deref(),
            label: self.label.as_deref(),
        }
    }
}

impl SourceAnnotationOwned {
    /// Returns `None` if the range does not belong to any of the input files
    pub fn as_source_annotation(&self, input_files: &InputFiles) -> Option<SourceAnnotation<'_>> {
        let code = input_files.find_span_code(self.range)?;
        let relative = code.get_relative_span(self.range)?;
        let source = &code.get_code().source;
        let mut range = relative.char_bounds(source);
        // Empty spans still get a single marker
        if range.0 == range.1 && range.1 < source.chars().count() {
            range.1 += 1;
        }
        Some(SourceAnnotation {
            range,
            label: &self.label,
            annotation_type: self.annotation_type,
        })
    }
}
