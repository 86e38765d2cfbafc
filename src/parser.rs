//! Selector parser: converts selector text into a [`Selector`]
//!
//! Grammar (informal):
//!
//! ```text
//! selector   = step (whitespace step)*
//! step       = word | word '[' predicates ']' | '[' predicates ']'
//! predicates = predicate (',' predicate)*
//! predicate  = field op value
//! op         = '*=' | '!=' | '>=' | '<=' | '>' | '<' | '='
//! value      = quoted ('\'' or '"', verbatim) | raw run up to ',' or ']'
//! ```
//!
//! The parser is total: it never panics and never reports syntax errors.
//! Malformed input degrades instead: an unterminated bracket consumes to end
//! of input and its predicate fragments are dropped, a predicate with an empty
//! field or value is dropped, and a numeric operator with a non-numeric
//! literal yields a permanently unsatisfiable predicate.

use crate::ast::{CmpOp, Operand, Predicate, Selector, Step};
use crate::lexer::Lexer;
use smallvec::SmallVec;

/// Parse selector text into its compiled step sequence.
pub fn parse(input: &str) -> Selector {
    let mut lexer = Lexer::new(input);
    let mut steps = Vec::new();

    loop {
        lexer.skip_whitespace();
        match lexer.current() {
            None => break,
            Some('[') => {
                // bracket with no leading identifier: wildcard step
                lexer.advance();
                if let Some(predicates) = parse_predicates(&mut lexer) {
                    steps.push(Step {
                        name: String::new(),
                        predicates,
                    });
                } else {
                    // unterminated bracket: keep the step, drop its predicates
                    steps.push(Step::default());
                }
            }
            Some(']') => {
                // stray closing bracket, ignored
                lexer.advance();
            }
            Some(_) => {
                let name = lexer.read_word();
                // a bracket directly after the word attaches to this step
                let predicates = if lexer.eat('[') {
                    parse_predicates(&mut lexer).unwrap_or_default()
                } else {
                    SmallVec::new()
                };
                steps.push(Step { name, predicates });
            }
        }
    }

    Selector { steps }
}

/// Parse the inside of a bracket block up to the closing `]`.
///
/// Returns `None` when the bracket never closes; the collected fragments are
/// discarded in that case.
fn parse_predicates(lexer: &mut Lexer) -> Option<SmallVec<[Predicate; 4]>> {
    let mut predicates = SmallVec::new();

    loop {
        lexer.skip_whitespace();
        match lexer.current() {
            None => return None,
            Some(']') => {
                lexer.advance();
                return Some(predicates);
            }
            Some(',') => {
                lexer.advance();
            }
            Some(_) => {
                if let Some(p) = parse_predicate(lexer) {
                    predicates.push(p);
                }
            }
        }
    }
}

/// Parse one `field op value` fragment. The cursor is left on the `,` or `]`
/// (or end of input) that terminates the fragment. Fragments with an empty
/// field, an empty value or no operator at all yield `None`.
fn parse_predicate(lexer: &mut Lexer) -> Option<Predicate> {
    let field = lexer.read_until(&['=', '!', '*', '<', '>', ',', ']']);
    let field = field.trim().to_string();

    let op = parse_operator(lexer)?;
    let literal = parse_literal(lexer);

    if field.is_empty() || literal.is_empty() {
        return None;
    }

    Some(compile_predicate(field, op, literal))
}

/// Longest-prefix operator match. Returns `None` when the fragment carries no
/// operator (the cursor sits on `,`, `]` or end of input).
fn parse_operator(lexer: &mut Lexer) -> Option<CmpOp> {
    match lexer.current()? {
        '=' => {
            lexer.advance();
            Some(CmpOp::Eq)
        }
        '!' => {
            lexer.advance();
            // a lone '!' is swallowed and the fragment read as equality
            Some(if lexer.eat('=') { CmpOp::Ne } else { CmpOp::Eq })
        }
        '*' => {
            lexer.advance();
            Some(if lexer.eat('=') { CmpOp::Like } else { CmpOp::Eq })
        }
        '>' => {
            lexer.advance();
            Some(if lexer.eat('=') { CmpOp::Ge } else { CmpOp::Gt })
        }
        '<' => {
            lexer.advance();
            Some(if lexer.eat('=') { CmpOp::Le } else { CmpOp::Lt })
        }
        _ => None,
    }
}

/// Read the predicate value: quoted literals embed `,`, spaces and operator
/// characters verbatim; unquoted values run up to the next `,` or `]`.
fn parse_literal(lexer: &mut Lexer) -> String {
    match lexer.current() {
        Some(q @ ('\'' | '"')) => {
            lexer.advance();
            let value = lexer.read_quoted(q);
            // anything between the closing quote and the fragment end is junk
            let _ = lexer.read_until(&[',', ']']);
            value
        }
        _ => lexer.read_until(&[',', ']']),
    }
}

/// Attach the typed operand. A numeric operator whose literal does not parse
/// as a number marks the predicate `Invalid` rather than failing the parse.
fn compile_predicate(field: String, op: CmpOp, literal: String) -> Predicate {
    match op {
        CmpOp::Gt | CmpOp::Ge | CmpOp::Lt | CmpOp::Le => {
            match literal.trim().parse::<f64>() {
                Ok(n) => Predicate {
                    field,
                    op,
                    operand: Operand::Number(n),
                },
                Err(_) => Predicate {
                    field,
                    op: CmpOp::Invalid,
                    operand: Operand::Text(literal),
                },
            }
        }
        _ => Predicate {
            field,
            op,
            operand: Operand::Text(literal),
        },
    }
}
