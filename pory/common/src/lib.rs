//! Common items used by the poryscript front end

mod config;
pub use config::{Config, LabelNamespace};

mod input_file;
pub use input_file::{Code, CodeId, CodeRef, InputFiles};

mod span;
pub use span::Span;

use indexmap::IndexMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
