use std::{borrow::Cow, fmt};

use annotate_snippets::snippet::AnnotationType;
use itertools::Itertools;
use pory_common::{InputFiles, Span};
use smol_str::SmolStr;

use super::{AnnotationOwned, AsAnnotationSnippet, SliceOwned, SnippetOwned, SourceAnnotationOwned};

/// The place where a label got defined
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum LabelKind {
    Script,
    Raw,
    Text,
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelKind::Script => write!(f, "script"),
            LabelKind::Raw => write!(f, "raw label"),
            LabelKind::Text => write!(f, "text"),
        }
    }
}

/// Any error that can be reported about an ast
#[derive(Debug, Eq, PartialEq, Clone, thiserror::Error)]
pub enum AstError {
    /// An identifier was constructed from an empty name
    #[error("identifier must not be empty")]
    EmptyIdentifier { span: Span },
    /// A text was constructed from an empty name
    #[error("text name must not be empty")]
    EmptyTextName,
    /// A label got defined a second time
    #[error("label `{name}` is defined multiple times, first as {first_kind} and again as {kind}")]
    DuplicateLabel {
        name: SmolStr,
        /// The kind of the second definition
        kind: LabelKind,
        span: Option<Span>,
        first_kind: LabelKind,
        first_span: Option<Span>,
    },
}

impl AstError {
    /// The primary location of this error, if it has one
    pub fn span(&self) -> Option<Span> {
        match self {
            AstError::EmptyIdentifier { span } => Some(*span),
            AstError::EmptyTextName => None,
            AstError::DuplicateLabel { span, .. } => *span,
        }
    }

    fn annotations(&self) -> Vec<SourceAnnotationOwned> {
        match self {
            AstError::EmptyIdentifier { span } => vec![SourceAnnotationOwned {
                annotation_type: AnnotationType::Error,
                range: *span,
                label: "Expected a name here".to_string(),
            }],
            AstError::EmptyTextName => Vec::new(),
            AstError::DuplicateLabel {
                kind,
                span,
                first_kind,
                first_span,
                ..
            } => first_span
                .map(|range| SourceAnnotationOwned {
                    annotation_type: AnnotationType::Info,
                    range,
                    label: format!("First defined here as {first_kind}"),
                })
                .into_iter()
                .chain(span.map(|range| SourceAnnotationOwned {
                    annotation_type: AnnotationType::Error,
                    range,
                    label: format!("Defined again here as {kind}"),
                }))
                .collect(),
        }
    }
}

impl<'a> AsAnnotationSnippet<'a> for AstError {
    fn as_annotation_snippet(&self, files: &'a InputFiles) -> SnippetOwned<'a> {
        let footer_help: Cow<str> = match self {
            AstError::EmptyIdentifier { .. } => "Identifiers must have a name".into(),
            AstError::EmptyTextName => "Texts must have a name".into(),
            AstError::DuplicateLabel { name, .. } => {
                format!("Every label must be unique, but `{name}` is not").into()
            }
        };

        let mut footer = vec![AnnotationOwned {
            annotation_type: AnnotationType::Info,
            id: None,
            label: Some(footer_help),
        }];
        if let AstError::DuplicateLabel { name, .. } = self {
            footer.push(AnnotationOwned {
                annotation_type: AnnotationType::Help,
                id: None,
                label: Some(format!("Try renaming one of the definitions of `{name}`").into()),
            });
        }

        // Group the annotations by file, keeping the order in which the files appear
        let slices = self
            .annotations()
            .into_iter()
            .filter_map(|annotation| {
                let code = files.find_span_code(annotation.range)?;
                Some((code.get_offset(), code.get_code(), annotation))
            })
            .into_group_map_by(|(offset, _, _)| *offset)
            .into_iter()
            .sorted_by_key(|(offset, _)| *offset)
            .filter_map(|(_, group)| {
                let code = group.first()?.1;
                Some(SliceOwned {
                    origin: code.path.as_deref(),
                    source: &code.source,
                    annotations: group
                        .into_iter()
                        .map(|(_, _, annotation)| annotation)
                        .collect(),
                })
            })
            .collect();

        let title = match self {
            AstError::EmptyIdentifier { .. } => Cow::Borrowed("Empty identifier"),
            AstError::EmptyTextName => Cow::Borrowed("Empty text name"),
            AstError::DuplicateLabel { name, .. } => {
                Cow::Owned(format!("Duplicate label `{name}`"))
            }
        };

        SnippetOwned {
            id: Some(Cow::Borrowed("Ast")),
            annotation_type: AnnotationType::Error,
            title,
            slices,
            footer,
        }
    }
}
