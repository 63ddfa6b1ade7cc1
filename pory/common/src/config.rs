/// Decides which label definitions can collide with each other
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LabelNamespace {
    /// Scripts, raw labels and texts share a single namespace,
    /// just like the labels of the emitted bytecode
    #[default]
    Shared,
    /// Every kind of label has its own namespace
    PerKind,
}

/// Options that influence how a finished program is inspected
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub label_namespace: LabelNamespace,
    /// Whether raw statements that are not global also define labels
    pub local_raw_labels: bool,
}
