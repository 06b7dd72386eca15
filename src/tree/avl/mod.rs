mod avl_tree;
mod cursor;
mod iter;
mod node;
mod tests;

pub use avl_tree::*;
pub use cursor::*;
pub use iter::*;
pub(crate) use node::*;
