/// The capability shared by every element of the tree
pub trait Node {
    /// The literal text of the token that introduced this node
    ///
    /// Only meant for diagnostics.
    fn token_literal(&self) -> &str;
}

/// Implements [`Node`] for a type with a `token` field
macro_rules! token_node {
    ($($node:ty),* $(,)?) => {
        $(
            impl $crate::node::Node for $node {
                fn token_literal(&self) -> &str {
                    self.token.literal()
                }
            }
        )*
    };
}

pub(crate) use token_node;
