mod binary_search_tree;
mod iter;
mod node;
mod tests;

pub use binary_search_tree::*;
pub use iter::*;
pub(crate) use node::*;
