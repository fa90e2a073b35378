use crate::error::SearchError;
use crate::game::{GameState, MoveError, Player};

use super::{Heuristic, Score, SearchResult, SearchStrategy, TerminalOnly, BEST_SCORE};

/// Stockman's SSS*: best-first branch-and-bound over the same depth-limited
/// game tree negamax walks.
///
/// The open list holds partially explored nodes as `(path, status, merit)`
/// triples, where `path` is the move sequence from the root, `merit` an upper
/// bound on the node's minimax value, and `status` marks whether the bound is
/// still being refined (`Live`) or final for the node's cluster (`Solved`).
/// The root player maximizes at even plies; leaf values are taken from the
/// side to move and sign-flipped on odd plies, matching the negamax
/// convention, so the solved root merit equals the negamax root score.
pub struct Sss {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Live,
    Solved,
}

#[derive(Debug, Clone)]
struct OpenEntry {
    path: Vec<usize>,
    status: Status,
    merit: Score,
}

impl OpenEntry {
    /// Extraction order: highest merit first; on equal merit prefer solved
    /// entries (they propagate bounds and purge work), then the
    /// lexicographically smallest path, keeping runs deterministic.
    fn beats(&self, other: &OpenEntry) -> bool {
        if self.merit != other.merit {
            return self.merit > other.merit;
        }
        match (self.status, other.status) {
            (Status::Solved, Status::Live) => true,
            (Status::Live, Status::Solved) => false,
            _ => self.path < other.path,
        }
    }
}

/// What a live node turns into when examined.
enum NodeKind {
    /// Terminal or depth-limit leaf, valued from the root player's view.
    Leaf(Score),
    /// Internal node with the children to enqueue: all of them at a
    /// maximizing ply, only the first at a minimizing ply.
    Branch(Vec<usize>),
}

impl Sss {
    /// Search `depth` plies deep with the original binary evaluation.
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, Box::new(TerminalOnly))
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        Sss {
            depth: depth.max(1),
            heuristic,
        }
    }

    /// Apply `path` from the root, run `f`, and undo the whole path again.
    fn with_path<T>(
        state: &mut GameState,
        path: &[usize],
        f: impl FnOnce(&mut GameState) -> T,
    ) -> Result<T, MoveError> {
        match path.split_first() {
            None => Ok(f(state)),
            Some((&col, rest)) => state.with_move(col, |s| Self::with_path(s, rest, f))?,
        }
    }

    fn index_of_best(open: &[OpenEntry]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, entry) in open.iter().enumerate() {
            match best {
                Some(j) if !entry.beats(&open[j]) => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Examine a live node and enqueue its successors.
    fn expand(
        &self,
        state: &mut GameState,
        root_player: Player,
        entry: OpenEntry,
        open: &mut Vec<OpenEntry>,
    ) -> Result<(), SearchError> {
        let depth_left = self.depth - entry.path.len();
        let is_max_ply = entry.path.len() % 2 == 0;

        let node = Self::with_path(state, &entry.path, |s| {
            let legal = s.legal_moves();
            if s.is_terminal() || depth_left == 0 || legal.is_empty() {
                let side = s.current_player();
                let raw = if s.is_terminal() {
                    s.score(side)
                } else {
                    self.heuristic.evaluate(s, side)
                };
                NodeKind::Leaf(if side == root_player { raw } else { -raw })
            } else if is_max_ply {
                NodeKind::Branch(legal)
            } else {
                NodeKind::Branch(vec![legal[0]])
            }
        })?;

        match node {
            NodeKind::Leaf(value) => open.push(OpenEntry {
                merit: entry.merit.min(value),
                status: Status::Solved,
                path: entry.path,
            }),
            NodeKind::Branch(columns) => {
                for col in columns {
                    let mut path = entry.path.clone();
                    path.push(col);
                    open.push(OpenEntry {
                        path,
                        status: Status::Live,
                        merit: entry.merit,
                    });
                }
            }
        }
        Ok(())
    }

    /// Propagate a solved non-root node to its parent.
    fn resolve(
        state: &mut GameState,
        entry: OpenEntry,
        open: &mut Vec<OpenEntry>,
        best_column: &mut Option<usize>,
    ) -> Result<(), SearchError> {
        let parent = &entry.path[..entry.path.len() - 1];
        let parent_is_max = parent.len() % 2 == 0;

        if parent_is_max {
            // Everything still in the open list is bounded by this merit, so
            // no sibling can beat it: the parent takes this child's value and
            // pending work below it becomes moot.
            open.retain(|e| !(e.path.len() > parent.len() && e.path.starts_with(parent)));
            if parent.is_empty() {
                *best_column = Some(entry.path[0]);
            }
            open.push(OpenEntry {
                path: parent.to_vec(),
                status: Status::Solved,
                merit: entry.merit,
            });
        } else {
            // A minimizing parent tries its next child under the tightened
            // ceiling; once the children are exhausted the ceiling is final.
            let last = entry.path[entry.path.len() - 1];
            let legal = Self::with_path(state, parent, |s| s.legal_moves())?;
            match legal.into_iter().find(|&c| c > last) {
                Some(next) => {
                    let mut path = parent.to_vec();
                    path.push(next);
                    open.push(OpenEntry {
                        path,
                        status: Status::Live,
                        merit: entry.merit,
                    });
                }
                None => open.push(OpenEntry {
                    path: parent.to_vec(),
                    status: Status::Solved,
                    merit: entry.merit,
                }),
            }
        }
        Ok(())
    }
}

impl SearchStrategy for Sss {
    fn search(&mut self, state: &mut GameState) -> Result<SearchResult, SearchError> {
        if state.legal_moves().is_empty() {
            return Err(SearchError::NoLegalMoves);
        }
        let root_player = state.current_player();

        let mut open = vec![OpenEntry {
            path: Vec::new(),
            status: Status::Live,
            merit: BEST_SCORE,
        }];
        let mut best_column: Option<usize> = None;

        loop {
            let Some(index) = Self::index_of_best(&open) else {
                return Err(SearchError::SearchExhausted);
            };
            let entry = open.swap_remove(index);

            if entry.path.is_empty() && entry.status == Status::Solved {
                let column = best_column.ok_or(SearchError::SearchExhausted)?;
                return Ok(SearchResult {
                    column,
                    score: entry.merit,
                });
            }

            match entry.status {
                Status::Live => self.expand(state, root_player, entry, &mut open)?,
                Status::Solved => Self::resolve(state, entry, &mut open, &mut best_column)?,
            }
        }
    }

    fn name(&self) -> &'static str {
        "SSS*"
    }
}
