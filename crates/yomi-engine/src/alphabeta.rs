use log::debug;

use yomi_core::{
    Action, Evaluator, Notation, Player, Position, Score, SearchError, SearchReport, Searcher,
};

use crate::material::MaterialEval;
use crate::trace::{NullObserver, SearchObserver};

/// A position paired with the side to move there. Nodes are created per
/// explored branch and dropped once their subtree's score has been
/// returned; only the recursion's call stack carries search state.
#[derive(Debug, Clone)]
pub struct SearchNode {
    position: Position,
    to_move: Player,
}

impl SearchNode {
    pub fn from_position(position: Position) -> Self {
        let to_move = position.side_to_move();
        Self { position, to_move }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }
}

/// Discounts a static evaluation by the depth remaining when it was
/// taken: a game-over leaf found with plies to spare divides by more
/// than a depth-exhausted one, so shallow certainties are not drowned
/// out by deep extrapolations.
pub fn depth_damped(score: Score, depth: u8) -> Score {
    score / (f64::from(depth) + 1.0)
}

/// Plain fixed-depth alpha-beta searcher. No move ordering, no
/// transposition table, no iterative deepening: every node either
/// evaluates statically or folds over its children in the rules
/// engine's enumeration order, pruning siblings that cannot change the
/// outcome.
pub struct AlphaBetaSearcher {
    eval: Box<dyn Evaluator>,
    nodes: u64,
}

impl std::fmt::Debug for AlphaBetaSearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaBetaSearcher")
            .field("eval", &"<Evaluator>")
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl AlphaBetaSearcher {
    pub fn new() -> Self {
        Self::with_eval(Box::new(MaterialEval::new()))
    }

    pub fn with_eval(eval: Box<dyn Evaluator>) -> Self {
        Self { eval, nodes: 0 }
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// [`Searcher::best_move`] with an observer wired into every
    /// explored edge, leaf, and cutoff.
    pub fn best_move_with_observer(
        &mut self,
        position: &Position,
        depth: u8,
        notation: Notation,
        observer: &mut dyn SearchObserver,
    ) -> Result<SearchReport, SearchError> {
        if depth == 0 {
            return Err(SearchError::DepthZero);
        }
        self.nodes = 0;

        let root = SearchNode::from_position(position.clone());
        let maximizing = root.to_move().is_maximizing();
        let actions = root.position().legal_actions();
        if actions.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        debug!(
            "searching {} root actions to depth {depth} from:\n{}",
            actions.len(),
            root.position().render()
        );

        let mut best: Option<(Action, Score)> = None;
        for action in actions {
            let child = SearchNode::from_position(root.position().apply(&action)?);
            observer.edge(&root, &action, depth);
            // Each root sibling gets a fresh full window, so its score
            // is exact rather than a fail-low bound. Ties therefore
            // resolve to the first action in enumeration order.
            let score = self.alpha_beta(
                &child,
                depth - 1,
                f64::NEG_INFINITY,
                f64::INFINITY,
                !maximizing,
                observer,
            )?;
            let better = match &best {
                None => true,
                Some((_, best_score)) if maximizing => score > *best_score,
                Some((_, best_score)) => score < *best_score,
            };
            if better {
                best = Some((action, score));
            }
        }

        let (action, score) = best.ok_or(SearchError::NoLegalMoves)?;
        let notated = action.notated(position, notation);
        debug!("best action {notated} scores {score:+.3} after {} nodes", self.nodes);

        Ok(SearchReport {
            action,
            notated,
            score,
            nodes: self.nodes,
        })
    }

    /// Scores a position to `depth` plies without committing to a move,
    /// maximizing or minimizing according to the side to move. Depth 0
    /// is the damped static evaluation itself.
    pub fn score(&mut self, position: &Position, depth: u8) -> Result<Score, SearchError> {
        self.nodes = 0;
        let node = SearchNode::from_position(position.clone());
        let maximizing = node.to_move().is_maximizing();
        self.alpha_beta(
            &node,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            maximizing,
            &mut NullObserver,
        )
    }

    fn alpha_beta(
        &mut self,
        node: &SearchNode,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        observer: &mut dyn SearchObserver,
    ) -> Result<Score, SearchError> {
        self.nodes += 1;

        if depth == 0 || node.position().is_terminal() {
            let score = self.leaf_score(node, depth);
            observer.leaf(node, depth, score);
            return Ok(score);
        }

        let actions = node.position().legal_actions();
        if actions.is_empty() {
            // Not flagged game-over yet nothing to play: evaluate
            // statically instead of returning an unbounded sentinel.
            let score = self.leaf_score(node, depth);
            observer.leaf(node, depth, score);
            return Ok(score);
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for action in actions {
                let child = SearchNode::from_position(node.position().apply(&action)?);
                observer.edge(node, &action, depth);
                let score = self.alpha_beta(&child, depth - 1, alpha, beta, false, observer)?;
                best = best.max(score);
                alpha = alpha.max(score);
                if alpha >= beta {
                    observer.cutoff(node, depth);
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = f64::INFINITY;
            for action in actions {
                let child = SearchNode::from_position(node.position().apply(&action)?);
                observer.edge(node, &action, depth);
                let score = self.alpha_beta(&child, depth - 1, alpha, beta, true, observer)?;
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    observer.cutoff(node, depth);
                    break;
                }
            }
            Ok(best)
        }
    }

    fn leaf_score(&self, node: &SearchNode, depth: u8) -> Score {
        depth_damped(self.eval.evaluate(node.position()), depth)
    }
}

impl Default for AlphaBetaSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher for AlphaBetaSearcher {
    fn best_move(
        &mut self,
        position: &Position,
        depth: u8,
        notation: Notation,
    ) -> Result<SearchReport, SearchError> {
        self.best_move_with_observer(position, depth, notation, &mut NullObserver)
    }
}
