//! Collects the labels that a program defines
//!
//! A [`Program`] does not care about duplicate names. Collaborators that need unique
//! labels (like an emitter that generates jump targets) can use the [`LabelIndex`]
//! to find collisions before emitting anything.

use std::ops::ControlFlow;

use pory_common::{Config, FxIndexMap, LabelNamespace, Span};
use pory_error::{AstError, LabelKind};
use smol_str::SmolStr;

use crate::{
    program::{Program, Text},
    statement::{RawStatement, ScriptStatement},
    visitor::{AstFlow, AstVisitor},
};

/// The first definition of a label
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Label {
    pub name: SmolStr,
    pub kind: LabelKind,
    /// Texts do not keep a token, so their labels have no span
    pub span: Option<Span>,
}

/// Under a shared namespace every label uses `None` as its namespace
type LabelKey = (Option<LabelKind>, SmolStr);

/// Every label of a program, in declaration order
#[derive(Debug, Default)]
pub struct LabelIndex {
    namespace: LabelNamespace,
    labels: FxIndexMap<LabelKey, Label>,
    duplicates: Vec<AstError>,
}

impl LabelIndex {
    /// Collects the labels of `program`
    ///
    /// Scripts and global raw statements define labels, just like every text does.
    /// Local raw statements only define labels if [`Config::local_raw_labels`] is set.
    pub fn collect(program: &Program, config: &Config) -> Self {
        let mut collector = LabelCollector {
            config,
            index: LabelIndex {
                namespace: config.label_namespace,
                ..Default::default()
            },
        };
        let _ = program.visit(&mut collector);

        let index = collector.index;
        tracing::debug!(
            labels = index.labels.len(),
            duplicates = index.duplicates.len(),
            "collected labels"
        );
        index
    }

    fn key(&self, kind: LabelKind, name: SmolStr) -> LabelKey {
        match self.namespace {
            LabelNamespace::Shared => (None, name),
            LabelNamespace::PerKind => (Some(kind), name),
        }
    }

    fn define(&mut self, name: &str, kind: LabelKind, span: Option<Span>) {
        let name = SmolStr::new(name);
        let key = self.key(kind, name.clone());
        if let Some(first) = self.labels.get(&key) {
            tracing::debug!(
                label = %name,
                %kind,
                first_kind = %first.kind,
                "duplicate label"
            );
            self.duplicates.push(AstError::DuplicateLabel {
                name,
                kind,
                span,
                first_kind: first.kind,
                first_span: first.span,
            });
        } else {
            self.labels.insert(key, Label { name, kind, span });
        }
    }

    /// Returns the label that `name` refers to in the namespace of `kind`
    pub fn get(&self, kind: LabelKind, name: &str) -> Option<&Label> {
        self.labels.get(&self.key(kind, SmolStr::new(name)))
    }

    /// The first definition of every label
    pub fn labels(&self) -> impl Iterator<Item = &Label> + '_ {
        self.labels.values()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Every redefinition, in the order in which it appeared
    pub fn duplicates(&self) -> &[AstError] {
        &self.duplicates
    }

    /// Returns the index, or every duplicate if there are any
    pub fn into_result(self) -> Result<Self, Vec<AstError>> {
        if self.duplicates.is_empty() {
            Ok(self)
        } else {
            Err(self.duplicates)
        }
    }
}

struct LabelCollector<'a> {
    config: &'a Config,
    index: LabelIndex,
}

impl AstVisitor for LabelCollector<'_> {
    fn visit_script(&mut self, script: &ScriptStatement) -> AstFlow {
        self.index.define(
            script.name.value(),
            LabelKind::Script,
            Some(script.name.span()),
        );
        ControlFlow::Continue(())
    }

    fn visit_raw(&mut self, raw: &RawStatement) -> AstFlow {
        if raw.is_global || self.config.local_raw_labels {
            self.index
                .define(raw.name.value(), LabelKind::Raw, Some(raw.name.span()));
        }
        ControlFlow::Continue(())
    }

    fn visit_text(&mut self, text: &Text) -> AstFlow {
        self.index.define(text.name(), LabelKind::Text, None);
        ControlFlow::Continue(())
    }
}
