//! Insertion-ordered keyed tree.
//!
//! A [`Tree`] is an arena of nodes addressed by [`NodeId`]. Every node carries
//! a key (its payload), a piece of metadata, and a set of children that is
//! both indexed by key and kept in insertion order.
//!
//! ```text
//! root '*'
//! ├── 'f'
//! │   └── 'i' ...
//! └── 'h'
//!     └── 'e' ...
//! ```
//!
//! Parent links are plain arena indices, so a node never owns its parent.
//! Detaching a subtree with [`Tree::remove_child`] moves its nodes out into a
//! tree of their own. Slots freed by removals are reused by later insertions,
//! and clearing the root's children shrinks the arena back to the root.

use std::collections::HashMap;
use std::hash::Hash;

/// Handle to a node inside a [`Tree`].
///
/// Handles stay valid until the node is removed. Queries made with a handle
/// whose node was removed return `None`, `false`, or an empty result, even
/// after its slot has been reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    stamp: u64,
}

#[derive(Debug, Clone)]
struct Node<T, M> {
    stamp: u64,
    key: T,
    meta: M,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    index: HashMap<T, NodeId>,
}

impl<T, M> Node<T, M> {
    fn new(stamp: u64, key: T, meta: M, parent: Option<NodeId>) -> Self {
        Node {
            stamp,
            key,
            meta,
            parent,
            children: Vec::new(),
            index: HashMap::new(),
        }
    }
}

/// A tree whose children are kept in insertion order and indexed by key.
///
/// Sibling keys are unique: adding a child under a key that is already taken
/// is refused.
///
/// # Example
///
/// ```
/// use argspec_trie::Tree;
///
/// let mut tree = Tree::new("root", ());
/// let root = tree.root();
/// let a = tree.add_child(root, "a", ()).unwrap();
/// tree.add_child(a, "a1", ()).unwrap();
/// tree.add_child(root, "b", ()).unwrap();
///
/// assert!(tree.add_child(root, "a", ()).is_none());
/// assert_eq!(tree.leaf_data(), vec![&"a1", &"b"]);
/// assert_eq!(tree.height(), 2);
/// assert_eq!(tree.node_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Tree<T, M> {
    nodes: Vec<Option<Node<T, M>>>,
    free: Vec<usize>,
    next_stamp: u64,
    root: NodeId,
}

impl<T, M> Tree<T, M>
where
    T: Clone + Eq + Hash,
{
    /// Creates a tree holding only a root node.
    pub fn new(root_key: T, root_meta: M) -> Self {
        Tree {
            nodes: vec![Some(Node::new(0, root_key, root_meta, None))],
            free: Vec::new(),
            next_stamp: 1,
            root: NodeId { index: 0, stamp: 0 },
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of arena slots, live or free.
    pub fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, id: NodeId) -> Option<&Node<T, M>> {
        self.nodes
            .get(id.index)
            .and_then(Option::as_ref)
            .filter(|n| n.stamp == id.stamp)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T, M>> {
        self.nodes
            .get_mut(id.index)
            .and_then(Option::as_mut)
            .filter(|n| n.stamp == id.stamp)
    }

    fn allocate(&mut self, key: T, meta: M, parent: NodeId) -> NodeId {
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        let node = Some(Node::new(stamp, key, meta, Some(parent)));

        let index = match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                index
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        NodeId { index, stamp }
    }

    fn release(&mut self, id: NodeId) -> Option<Node<T, M>> {
        self.node(id)?;
        let node = self.nodes[id.index].take();
        self.free.push(id.index);
        node
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Creates a child of `parent` under `key`.
    ///
    /// Returns `None` when `parent` already has a child with that key, or when
    /// `parent` is no longer part of the tree.
    pub fn add_child(&mut self, parent: NodeId, key: T, meta: M) -> Option<NodeId> {
        if self.node(parent)?.index.contains_key(&key) {
            return None;
        }

        let id = self.allocate(key.clone(), meta, parent);
        let parent_node = self.node_mut(parent)?;
        parent_node.children.push(id);
        parent_node.index.insert(key, id);
        Some(id)
    }

    /// Returns the child of `parent` under `key`, creating it with `meta` if
    /// it does not exist yet.
    ///
    /// Returns `None` when `parent` is no longer part of the tree.
    pub fn child_or_insert_with<F>(&mut self, parent: NodeId, key: T, meta: F) -> Option<NodeId>
    where
        F: FnOnce() -> M,
    {
        match self.child(parent, &key) {
            Some(existing) => Some(existing),
            None => self.add_child(parent, key, meta()),
        }
    }

    /// Detaches the child of `parent` under `key` along with everything below
    /// it.
    ///
    /// The detached nodes are returned as a tree of their own whose root is
    /// the removed child. Handles into the removed subtree become stale.
    pub fn remove_child(&mut self, parent: NodeId, key: &T) -> Option<Tree<T, M>> {
        let parent_node = self.node_mut(parent)?;
        let child = parent_node.index.remove(key)?;
        parent_node.children.retain(|id| *id != child);
        Some(self.detach(child))
    }

    /// Drops every descendant of `id`.
    pub fn remove_children(&mut self, id: NodeId) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let children = std::mem::take(&mut node.children);
        node.index.clear();

        if id == self.root {
            self.nodes.truncate(1);
            self.free.clear();
            return;
        }
        for child in children {
            for descendant in self.descendants(child) {
                self.release(descendant);
            }
        }
    }

    fn detach(&mut self, top: NodeId) -> Tree<T, M> {
        let order = self.descendants(top);
        let remap: HashMap<NodeId, NodeId> = order
            .iter()
            .enumerate()
            .map(|(new, old)| {
                let new = NodeId {
                    index: new,
                    stamp: new as u64,
                };
                (*old, new)
            })
            .collect();
        let relink = |id: &mut NodeId| {
            if let Some(new) = remap.get(id) {
                *id = *new;
            }
        };

        let mut nodes = Vec::with_capacity(order.len());
        for old in &order {
            if let Some(mut node) = self.release(*old) {
                node.stamp = remap[old].stamp;
                node.parent = node.parent.and_then(|p| remap.get(&p).copied());
                node.children.iter_mut().for_each(relink);
                node.index.values_mut().for_each(relink);
                nodes.push(Some(node));
            }
        }

        Tree {
            next_stamp: nodes.len() as u64,
            nodes,
            free: Vec::new(),
            root: NodeId { index: 0, stamp: 0 },
        }
    }

    // ========================================================================
    // Node access
    // ========================================================================

    /// Returns the key stored at `id`.
    pub fn key(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|n| &n.key)
    }

    /// Returns the metadata stored at `id`.
    pub fn meta(&self, id: NodeId) -> Option<&M> {
        self.node(id).map(|n| &n.meta)
    }

    /// Returns the metadata stored at `id` for modification.
    pub fn meta_mut(&mut self, id: NodeId) -> Option<&mut M> {
        self.node_mut(id).map(|n| &mut n.meta)
    }

    /// Returns the parent of `id`. The root has none.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Returns the child of `parent` under `key`.
    pub fn child(&self, parent: NodeId, key: &T) -> Option<NodeId> {
        self.node(parent).and_then(|n| n.index.get(key).copied())
    }

    /// Returns true if `parent` has a child under `key`.
    pub fn contains_child(&self, parent: NodeId, key: &T) -> bool {
        self.child(parent, key).is_some()
    }

    /// Returns the children of `id` in insertion order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Returns `id` and everything below it in pre-order, children visited in
    /// insertion order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.node(current) else {
                continue;
            };
            out.push(current);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    // ========================================================================
    // Derived queries
    // ========================================================================

    /// Returns true if `id` is a live node without children.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.children.is_empty())
    }

    /// Returns true if `id` is the root of this tree.
    pub fn is_root(&self, id: NodeId) -> bool {
        id == self.root
    }

    /// Length of the longest root-to-leaf path, in edges.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    fn height_of(&self, id: NodeId) -> usize {
        self.children(id)
            .iter()
            .map(|child| 1 + self.height_of(*child))
            .max()
            .unwrap_or(0)
    }

    /// Number of nodes reachable from the root, the root included.
    pub fn node_count(&self) -> usize {
        self.descendants(self.root).len()
    }

    /// Keys of every leaf, in depth-first order.
    ///
    /// A tree holding only its root reports the root as its single leaf.
    pub fn leaf_data(&self) -> Vec<&T> {
        self.descendants(self.root)
            .into_iter()
            .filter(|id| self.is_leaf(*id))
            .filter_map(|id| self.key(id))
            .collect()
    }
}
