//! # symdiff-rs: symbolic differentiation over expression DAGs
//!
//! **`symdiff-rs`** represents algebraic expressions as directed acyclic graphs of arithmetic
//! operators over numeric and symbolic leaves, and differentiates them with a generic,
//! memoized post-order reduction.
//!
//! ## Key Features
//!
//! - **Manager-Centric Architecture**: All nodes live in an [`Exprs`][crate::exprs::Exprs] arena
//!   and are addressed by lightweight [`ExprId`][crate::reference::ExprId] handles.
//!   A handle may be used as an operand any number of times, so subexpressions are shared.
//! - **Identity, not structure**: every constructor call allocates a fresh node.
//!   Two `Number(5)` leaves built separately are two nodes; one leaf used twice is one node.
//! - **Reduction engine**: [`Exprs::reduce`][crate::exprs::Exprs::reduce] folds an expression
//!   bottom-up with an explicit stack, calling the step function exactly once per distinct node.
//! - **Differentiation**: a rule per node kind, run through the reduction engine,
//!   so shared subexpressions are differentiated once.
//!
//! ## Basic Usage
//!
//! ```rust
//! use symdiff_rs::exprs::Exprs;
//!
//! // 1. Initialize the manager
//! let exprs = Exprs::default();
//!
//! // 2. Create leaves
//! let x = exprs.symbol("x").unwrap();
//! let y = exprs.var("y");
//!
//! // 3. Build a formula: f = (x + y) * x
//! // Bare numbers are lifted into `Number` leaves on either side.
//! let f = exprs.mul(exprs.add(x, y), x);
//! assert_eq!(exprs.render(f), "(x + y) * x");
//! assert_eq!(exprs.render(exprs.add(f, 3)), "(x + y) * x + 3");
//!
//! // 4. Differentiate
//! let df = exprs.differentiate(f, "x").unwrap();
//! assert_eq!(exprs.render_value(df), "1.0 * x + 1.0 * (x + y)");
//! ```
//!
//! ## Core Components
//!
//! - **[`exprs`]**: The [`Exprs`][crate::exprs::Exprs] manager, terminal constructors and combinators.
//! - **[`reduce`]**: The memoized post-order reduction engine.
//! - **[`diff`]**: Differentiation rules.
//! - **[`render`]**: Infix and diagnostic string forms.

pub mod diff;
pub mod error;
pub mod exprs;
pub mod node;
pub mod number;
pub mod reduce;
pub mod reference;
pub mod render;
