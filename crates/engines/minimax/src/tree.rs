//! Arena-backed search tree.
//!
//! Nodes live in one `Vec` and refer to each other through [`NodeId`]
//! handles. A node owns its child list; the parent handle is only used to
//! walk back up when inspecting a finished search.

use halma_core::{BoardState, Move, Mover, Score, Side};

/// Handle to a node inside a [`SearchTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
pub struct SearchNode {
    pub board: BoardState,
    /// Move leading here from the parent; None at the root.
    pub mv: Option<Move>,
    pub mover: Option<Mover>,
    pub parent: Option<NodeId>,
    /// Heuristic score from the searching player's point of view.
    pub static_score: Score,
    /// Backed-up value, set once the node has been searched.
    pub value: Option<Score>,
    pub children: Vec<NodeId>,
    /// Index into `children` of the successor this node would pick.
    pub preferred: Option<usize>,
}

/// All nodes of one search, rooted at index 0.
#[derive(Clone, Debug)]
pub struct SearchTree {
    player: Side,
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// A tree holding only the root, scored for `player`.
    pub fn new(board: BoardState, player: Side) -> Self {
        let static_score = halma_core::evaluate(&board, player, None);
        let root = SearchNode {
            board,
            mv: None,
            mover: None,
            parent: None,
            static_score,
            value: None,
            children: Vec::new(),
            preferred: None,
        };
        Self {
            player,
            nodes: vec![root],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The side the tree is searched for.
    pub fn player(&self) -> Side {
        self.player
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a child under `parent` and returns its handle.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        board: BoardState,
        mv: Move,
        mover: Mover,
        static_score: Score,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SearchNode {
            board,
            mv: Some(mv),
            mover: Some(mover),
            parent: Some(parent),
            static_score,
            value: None,
            children: Vec::new(),
            preferred: None,
        });
        self.node_mut(parent).children.push(id);
        id
    }

    pub fn preferred_child(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        node.preferred.and_then(|i| node.children.get(i).copied())
    }

    /// Moves along the preferred-child chain starting below `id`.
    pub fn principal_variation(&self, id: NodeId) -> Vec<Move> {
        let mut line = Vec::new();
        let mut current = id;
        while let Some(next) = self.preferred_child(current) {
            match &self.node(next).mv {
                Some(mv) => line.push(mv.clone()),
                None => break,
            }
            current = next;
        }
        line
    }

    /// Number of plies between `id` and the root.
    pub fn ply(&self, id: NodeId) -> usize {
        let mut ply = 0;
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            ply += 1;
            current = self.node(parent).parent;
        }
        ply
    }
}
