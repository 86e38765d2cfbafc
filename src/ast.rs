//! Compiled selector representation
//!
//! A selector string compiles into an ordered sequence of [`Step`]s. Order is
//! significant: the matcher satisfies steps strictly in sequence, never
//! skipping or reordering. Steps and predicates are immutable after parsing.

use smallvec::SmallVec;

/// Comparison operator of a predicate.
///
/// `Invalid` marks a numeric operator whose literal failed to parse as a
/// number; such a predicate can never be satisfied, which silences the
/// affected branch of matching instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    /// `=`: string rendering equals the operand
    Eq,
    /// `*=`: string rendering contains the operand
    Like,
    /// `!=`: string rendering differs from the operand
    Ne,
    /// `>`: numeric comparison
    Gt,
    /// `>=`: numeric comparison
    Ge,
    /// `<`: numeric comparison
    Lt,
    /// `<=`: numeric comparison
    Le,
    /// Never satisfied
    Invalid,
}

/// Literal a predicate compares against.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Text(String),
    Number(f64),
}

/// One condition tested against the children of the value under inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    /// Child-entry name the predicate inspects
    pub field: String,
    pub op: CmpOp,
    pub operand: Operand,
}

/// One position in a selector path: a key-name test plus zero or more
/// predicates, all of which must hold (AND semantics) on the children of the
/// value being tested.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Step {
    /// Key to match against a container entry name; empty means "any key"
    pub name: String,
    pub predicates: SmallVec<[Predicate; 4]>,
}

impl Step {
    /// Whether this step matches any key.
    pub fn is_wildcard(&self) -> bool {
        self.name.is_empty()
    }
}

/// A compiled selector: the ordered step sequence produced by the parser.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selector {
    pub steps: Vec<Step>,
}

impl Selector {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
}
