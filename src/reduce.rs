//! Memoized post-order reduction over an expression DAG.
//!
//! [`Exprs::reduce`] folds an expression bottom-up: the `step` function sees a node
//! together with the already-reduced values of its operands, and returns the node's value.
//!
//! The walk uses an explicit stack rather than recursion, so the depth of an expression
//! is limited only by memory. Results are cached by [`ExprId`], so a node shared by many
//! parents is reduced exactly once:
//!
//! ```
//! use std::convert::Infallible;
//! use symdiff_rs::exprs::Exprs;
//!
//! let exprs = Exprs::default();
//! let x = exprs.var("x");
//! let sq = exprs.mul(x, x);
//!
//! let mut calls = 0;
//! let size = exprs
//!     .reduce(sq, |_, children: &[usize], _| {
//!         calls += 1;
//!         Ok::<_, Infallible>(1 + children.iter().sum::<usize>())
//!     }, &())
//!     .unwrap();
//! assert_eq!(calls, 2);
//! assert_eq!(size, 3); // tree size counts `x` twice
//! ```

use std::collections::HashMap;

use log::debug;

use crate::exprs::Exprs;
use crate::reference::ExprId;

/// Counters collected during one reduction.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ReduceStats {
    /// Number of `step` calls, i.e. distinct nodes reduced.
    pub steps: usize,
    /// Pops of a node that was already cached.
    pub revisits: usize,
    /// Largest size reached by the work stack.
    pub max_stack: usize,
}

impl Exprs {
    /// Reduce the DAG rooted at `root` with `step`.
    ///
    /// `step(node, reduced_operands, context)` is called once per distinct node, after all of
    /// its operands were reduced. The first error returned by `step` stops the walk.
    ///
    /// `step` may allocate new nodes in this manager; they never take part in the walk.
    pub fn reduce<R, C, E, F>(&self, root: ExprId, step: F, context: &C) -> Result<R, E>
    where
        R: Clone,
        C: ?Sized,
        F: FnMut(ExprId, &[R], &C) -> Result<R, E>,
    {
        self.reduce_with_stats(root, step, context).map(|(result, _)| result)
    }

    /// Same as [`reduce`][Exprs::reduce], also returning the walk counters.
    pub fn reduce_with_stats<R, C, E, F>(
        &self,
        root: ExprId,
        mut step: F,
        context: &C,
    ) -> Result<(R, ReduceStats), E>
    where
        R: Clone,
        C: ?Sized,
        F: FnMut(ExprId, &[R], &C) -> Result<R, E>,
    {
        debug!("reduce(root = {})", root);

        let mut stats = ReduceStats::default();
        let mut cache: HashMap<ExprId, R> = HashMap::new();
        let mut stack: Vec<ExprId> = vec![root];

        while let Some(e) = stack.pop() {
            if cache.contains_key(&e) {
                // Pushed by two parents before either resolved it.
                stats.revisits += 1;
                continue;
            }

            let operands = self.operands(e);
            let mut unvisited: Vec<ExprId> = Vec::with_capacity(operands.len());
            for &o in &operands {
                if !cache.contains_key(&o) && !unvisited.contains(&o) {
                    unvisited.push(o);
                }
            }

            if !unvisited.is_empty() {
                stack.push(e);
                stack.extend(unvisited);
                stats.max_stack = stats.max_stack.max(stack.len());
                continue;
            }

            let reduced: Vec<R> = operands.iter().map(|o| cache[o].clone()).collect();
            let result = step(e, &reduced, context)?;
            stats.steps += 1;
            cache.insert(e, result);
        }

        debug!(
            "reduce(root = {}): steps = {}, revisits = {}, max_stack = {}",
            root, stats.steps, stats.revisits, stats.max_stack
        );

        // The root is the last node to be resolved.
        let result = cache
            .remove(&root)
            .unwrap_or_else(|| unreachable!("root {} left unreduced", root));
        Ok((result, stats))
    }
}
