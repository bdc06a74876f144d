use crate::node::Node;
use crate::node_id::NodeId;
use std::sync::Arc;

/// -------- Lineage of stages --------
/// Each stage points at its parent, so appending is O(1) and never touches an
/// existing lineage. Branches share their common prefix.
struct Stage {
    id: NodeId,
    node: Node,
    parent: Option<Arc<Stage>>,
}

/// Immutable chain of plan nodes from a source to the current stage.
///
/// Cloning is cheap (one `Arc` bump). A `Pipeline` holds no interior
/// mutability; every transform returns a new value.
#[derive(Clone)]
pub struct Pipeline {
    tail: Arc<Stage>,
}

impl Pipeline {
    pub(crate) fn from_source(node: Node) -> Self {
        Self {
            tail: Arc::new(Stage {
                id: NodeId::new(0),
                node,
                parent: None,
            }),
        }
    }

    pub(crate) fn then(&self, node: Node) -> Self {
        Self {
            tail: Arc::new(Stage {
                id: self.tail.id.next(),
                node,
                parent: Some(Arc::clone(&self.tail)),
            }),
        }
    }

    /// Id of the last stage in the lineage.
    pub fn terminal(&self) -> NodeId {
        self.tail.id
    }

    /// Number of stages, source included.
    pub fn len(&self) -> usize {
        self.tail.id.raw() as usize + 1
    }

    /// Always `false`: a lineage starts with its source.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Edges `(from, to)` between consecutive stages, source first.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let ids: Vec<NodeId> = self.walk().map(|s| s.id).collect();
        ids.windows(2).rev().map(|w| (w[1], w[0])).collect()
    }

    /// Copy out the stages in execution order (source -> terminal).
    pub(crate) fn snapshot(&self) -> Vec<(NodeId, Node)> {
        let mut chain: Vec<(NodeId, Node)> =
            self.walk().map(|s| (s.id, s.node.clone())).collect();
        chain.reverse();
        chain
    }

    /// Backwalk from the terminal to the source.
    fn walk(&self) -> impl Iterator<Item = &Stage> {
        std::iter::successors(Some(self.tail.as_ref()), |s| s.parent.as_deref())
    }
}
