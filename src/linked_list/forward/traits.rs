use super::node::NodeId;

/// A forward link in a list.
///
/// Implemented by real nodes and by the list's sentinel, so that linking
/// after the sentinel and linking after a node go through the same code.
pub(crate) trait Link {
    /// Get the id of the next node
    fn next(&self) -> Option<NodeId>;

    /// Set the id of the next node
    fn set_next(&mut self, next: Option<NodeId>);
}
