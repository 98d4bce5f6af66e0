//! Pure AST-to-AST rewrites from convenience forms to primitive forms.
//!
//! Mirrors the original implementation's `Transformer`: `def_to_lambda`,
//! `switch_to_if`, `for_to_while`, `inc_to_set`/`dec_to_set`, and
//! `plus_assign_to_set`/`minus_assign_to_set`. Each rewrite is stateless
//! and operates on already-parsed [`Ast`] nodes.

use crate::ast::Ast;

/// `(def name params body)` -> `(var name (lambda params body))`.
pub fn def_to_lambda(name: Ast, params: Ast, body: Ast) -> Ast {
    Ast::list([
        Ast::symbol("var"),
        name,
        Ast::list([Ast::symbol("lambda"), params, body]),
    ])
}

/// `((c1 b1) (c2 b2) ... (else be))` -> right-nested
/// `(if c1 b1 (if c2 b2 ... be))`. The `else` clause must be last; a
/// switch without one desugars to a dangling `if` whose alternate is
/// `null` (accepted per §4.1 edge cases, handled by the evaluator when
/// it falls through `clauses.is_empty()`).
pub fn switch_to_if(clauses: &[Ast]) -> Ast {
    match clauses.split_first() {
        None => Ast::symbol("null"),
        Some((clause, rest)) => {
            let items = clause.as_list().unwrap_or(&[]);
            if items.first().and_then(Ast::as_symbol) == Some("else") {
                items.get(1).cloned().unwrap_or(Ast::symbol("null"))
            } else {
                let cond = items.first().cloned().unwrap_or(Ast::symbol("null"));
                let branch = items.get(1).cloned().unwrap_or(Ast::symbol("null"));
                Ast::list([Ast::symbol("if"), cond, branch, switch_to_if(rest)])
            }
        }
    }
}

/// `(for init cond step body)` -> `(begin init (while cond (begin body step)))`.
pub fn for_to_while(init: Ast, cond: Ast, step: Ast, body: Ast) -> Ast {
    Ast::list([
        Ast::symbol("begin"),
        init,
        Ast::list([
            Ast::symbol("while"),
            cond,
            Ast::list([Ast::symbol("begin"), body, step]),
        ]),
    ])
}

/// `(++ var)` -> `(set var (+ var 1))`; `(-- var)` -> `(set var (- var 1))`.
pub fn inc_dec_to_set(op: &str, var: Ast) -> Ast {
    let binary_op = match op {
        "++" => "+",
        "--" => "-",
        _ => unreachable!("inc_dec_to_set called with {op}"),
    };
    Ast::list([
        Ast::symbol("set"),
        var.clone(),
        Ast::list([Ast::symbol(binary_op), var, Ast::Integer(1)]),
    ])
}

/// `(+= var val)` -> `(set var (+ var val))`; `(-= var val)` likewise.
/// `*=`/`/=` follow the same pattern (§4.3) and are supported here too.
pub fn compound_assign_to_set(op: &str, var: Ast, val: Ast) -> Ast {
    let binary_op = match op {
        "+=" => "+",
        "-=" => "-",
        "*=" => "*",
        "/=" => "/",
        _ => unreachable!("compound_assign_to_set called with {op}"),
    };
    Ast::list([
        Ast::symbol("set"),
        var.clone(),
        Ast::list([Ast::symbol(binary_op), var, val]),
    ])
}
