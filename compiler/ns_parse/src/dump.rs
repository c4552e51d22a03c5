//! Indented tree rendering of a parsed statement, for `nullscript parse`.

use std::fmt::Write;

use ns_ir::{ExprId, ExprKind, StringInterner};
use ns_stack::ensure_sufficient_stack;

use crate::Statement;

impl Statement {
    /// Render the statement as an indented tree, one node per line.
    pub fn dump(&self, interner: &StringInterner) -> String {
        let mut out = String::new();
        Dumper {
            statement: self,
            interner,
            out: &mut out,
        }
        .node(self.root, 0);
        out
    }
}

struct Dumper<'a> {
    statement: &'a Statement,
    interner: &'a StringInterner,
    out: &'a mut String,
}

impl Dumper<'_> {
    fn line(&mut self, depth: usize, text: &str) {
        let _ = writeln!(self.out, "{:width$}{text}", "", width = depth * 2);
    }

    fn node(&mut self, id: ExprId, depth: usize) {
        ensure_sufficient_stack(|| {
            let statement = self.statement;
            let arena = &statement.arena;
            let expr = *arena.get_expr(id);
            match expr.kind {
                ExprKind::Literal(sentinel) => self.line(depth, &format!("Literal {sentinel}")),
                ExprKind::Ident(name) => {
                    let text = format!("Ident {}", self.interner.lookup(name));
                    self.line(depth, &text);
                }
                ExprKind::Pair { car, cdr } => {
                    self.line(depth, "Pair");
                    self.node(car, depth + 1);
                    self.node(cdr, depth + 1);
                }
                ExprKind::Call { func, args } => {
                    self.line(depth, "Call");
                    self.node(func, depth + 1);
                    for &arg in arena.get_expr_list(args) {
                        self.node(arg, depth + 1);
                    }
                }
                ExprKind::FunctionDef { name, params, body } => {
                    let params: Vec<_> = arena
                        .get_params(params)
                        .iter()
                        .map(|p| self.interner.lookup(p.name))
                        .collect();
                    let text = format!(
                        "FunctionDef {}({})",
                        self.interner.lookup(name),
                        params.join(", ")
                    );
                    self.line(depth, &text);
                    self.node(body, depth + 1);
                }
                ExprKind::If {
                    cond,
                    then_branch,
                    else_branch,
                } => {
                    self.line(depth, "If");
                    self.node(cond, depth + 1);
                    self.node(then_branch, depth + 1);
                    if let Some(else_branch) = else_branch {
                        self.line(depth, "Else");
                        self.node(else_branch, depth + 1);
                    }
                }
                ExprKind::Match {
                    scrutinee,
                    arms,
                    default,
                } => {
                    self.line(depth, "Match");
                    self.node(scrutinee, depth + 1);
                    for arm in arena.get_arms(arms) {
                        self.line(depth + 1, "Case");
                        self.node(arm.pattern, depth + 2);
                        self.node(arm.body, depth + 2);
                    }
                    if let Some(default) = default {
                        self.line(depth + 1, "Default");
                        self.node(default, depth + 2);
                    }
                }
            }
        });
    }
}
