//! Grammar rules, outermost first.
//!
//! ```text
//! statement    := function_def | expression
//! expression   := if_expr
//! if_expr      := 'if' match_expr '{' expression '}' ['else' '{' expression '}'] | match_expr
//! match_expr   := 'match' call_expr '{' case* ['default' '->' expression] '}' | call_expr
//! case         := 'case' call_expr '->' expression
//! call_expr    := primary ('(' (expression (',' expression)*)? ')')*
//! primary      := 'none' | 'nil' | 'undefined' | 'null'
//!               | 'pair' '(' expression ',' expression ')'
//!               | 'list' '(' (expression (',' expression)*)? ')'
//!               | IDENTIFIER
//!               | '(' expression ')'
//! function_def := 'function' IDENTIFIER '(' (IDENTIFIER (',' IDENTIFIER)*)? ')' '{' expression '}'
//! ```

use ns_ir::{Expr, ExprId, ExprKind, MatchArm, Param, Sentinel, Span, TokenKind};
use ns_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Run `f`, tagging any error it returns with `context`.
    fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        f(self).map_err(|err| err.with_context(context))
    }

    fn alloc(&mut self, kind: ExprKind, span: Span) -> Result<ExprId, ParseError> {
        self.arena
            .alloc_expr(Expr::new(kind, span))
            .map_err(|overflow| ParseError::too_many_items(overflow, span))
    }

    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }

    pub(crate) fn parse_statement(&mut self) -> Result<ExprId, ParseError> {
        if self.cursor.check(TokenKind::Function) {
            self.in_error_context(ErrorContext::FunctionDef, Self::parse_function_def)
        } else {
            self.parse_expression()
        }
    }

    fn parse_function_def(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.expect(TokenKind::Function)?.span;
        let (name, _) = self.cursor.expect_ident("a function name")?;
        tracing::trace!(name = %self.cursor.interner().lookup(name), "function definition");

        self.cursor.expect(TokenKind::LParen)?;
        let params = self.in_error_context(ErrorContext::FunctionParams, Self::parse_params)?;
        let params = self
            .arena
            .alloc_params(params)
            .map_err(|overflow| ParseError::too_many_items(overflow, start))?;

        self.cursor.expect(TokenKind::LBrace)?;
        let body = self.parse_expression()?;
        let end = self.cursor.expect(TokenKind::RBrace)?.span;

        self.alloc(
            ExprKind::FunctionDef { name, params, body },
            start.merge(end),
        )
    }

    /// Parameter names up to and including the closing `)`.
    fn parse_params(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                let (name, span) = self.cursor.expect_ident("a parameter name")?;
                params.push(Param { name, span });
                if !self.cursor.check(TokenKind::Comma) {
                    break;
                }
                self.cursor.advance();
            }
        }
        self.cursor.expect(TokenKind::RParen)?;
        Ok(params)
    }

    /// Comma-separated expressions up to and including the closing `)`.
    fn parse_expr_list(&mut self) -> Result<Vec<ExprId>, ParseError> {
        let mut exprs = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                exprs.push(self.parse_expression()?);
                if !self.cursor.check(TokenKind::Comma) {
                    break;
                }
                self.cursor.advance();
            }
        }
        self.cursor.expect(TokenKind::RParen)?;
        Ok(exprs)
    }

    pub(crate) fn parse_expression(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| {
            if self.cursor.check(TokenKind::If) {
                self.in_error_context(ErrorContext::IfExpression, Self::parse_if)
            } else {
                self.parse_match_level()
            }
        })
    }

    fn parse_if(&mut self) -> Result<ExprId, ParseError> {
        tracing::trace!("if expression");
        let start = self.cursor.expect(TokenKind::If)?.span;
        let cond = self.parse_match_level()?;

        self.cursor.expect(TokenKind::LBrace)?;
        let then_branch = self.parse_expression()?;
        let mut end = self.cursor.expect(TokenKind::RBrace)?.span;

        let else_branch = if self.cursor.check(TokenKind::Else) {
            self.cursor.advance();
            self.cursor.expect(TokenKind::LBrace)?;
            let else_branch = self.parse_expression()?;
            end = self.cursor.expect(TokenKind::RBrace)?.span;
            Some(else_branch)
        } else {
            None
        };

        self.alloc(
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            },
            start.merge(end),
        )
    }

    fn parse_match_level(&mut self) -> Result<ExprId, ParseError> {
        if self.cursor.check(TokenKind::Match) {
            self.in_error_context(ErrorContext::MatchExpression, Self::parse_match)
        } else {
            self.parse_call()
        }
    }

    fn parse_match(&mut self) -> Result<ExprId, ParseError> {
        tracing::trace!("match expression");
        let start = self.cursor.expect(TokenKind::Match)?.span;
        let scrutinee = self.parse_call()?;
        self.cursor.expect(TokenKind::LBrace)?;

        let mut arms = Vec::new();
        while self.cursor.check(TokenKind::Case) {
            arms.push(self.in_error_context(ErrorContext::MatchArm, Self::parse_arm)?);
        }

        let default = if self.cursor.check(TokenKind::Default) {
            self.cursor.advance();
            self.cursor.expect(TokenKind::Arrow)?;
            Some(self.parse_expression()?)
        } else {
            None
        };

        let end = self.cursor.expect(TokenKind::RBrace)?.span;
        let span = start.merge(end);
        let arms = self
            .arena
            .alloc_arms(arms)
            .map_err(|overflow| ParseError::too_many_items(overflow, span))?;

        self.alloc(
            ExprKind::Match {
                scrutinee,
                arms,
                default,
            },
            span,
        )
    }

    fn parse_arm(&mut self) -> Result<MatchArm, ParseError> {
        let start = self.cursor.expect(TokenKind::Case)?.span;
        let pattern = self.parse_call()?;
        self.cursor.expect(TokenKind::Arrow)?;
        let body = self.parse_expression()?;
        Ok(MatchArm {
            pattern,
            body,
            span: start.merge(self.span_of(body)),
        })
    }

    /// A primary followed by any number of argument lists: `f(a)(b)`.
    fn parse_call(&mut self) -> Result<ExprId, ParseError> {
        let mut func = self.parse_primary()?;
        while self.cursor.check(TokenKind::LParen) {
            let args = self.in_error_context(ErrorContext::FunctionCall, |p| {
                p.cursor.advance();
                p.parse_expr_list()
            })?;
            let span = self.span_of(func).merge(self.cursor.previous_span());
            let args = self
                .arena
                .alloc_expr_list(args)
                .map_err(|overflow| ParseError::too_many_items(overflow, span))?;
            func = self.alloc(ExprKind::Call { func, args }, span)?;
        }
        Ok(func)
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let token = self.cursor.current();
        let sentinel = match token.kind {
            TokenKind::None => Some(Sentinel::None),
            TokenKind::Nil => Some(Sentinel::Nil),
            TokenKind::Undefined => Some(Sentinel::Undefined),
            TokenKind::Null => Some(Sentinel::Null),
            _ => None,
        };
        if let Some(sentinel) = sentinel {
            self.cursor.advance();
            return self.alloc(ExprKind::Literal(sentinel), token.span);
        }

        match token.kind {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                self.alloc(ExprKind::Ident(name), token.span)
            }
            TokenKind::Pair => self.in_error_context(ErrorContext::PairLiteral, Self::parse_pair),
            TokenKind::List => self.in_error_context(ErrorContext::ListLiteral, Self::parse_list),
            TokenKind::LParen => self.in_error_context(ErrorContext::Parenthesized, |p| {
                p.cursor.advance();
                let inner = p.parse_expression()?;
                p.cursor.expect(TokenKind::RParen)?;
                Ok(inner)
            }),
            found => Err(ParseError::expected_expression(found, token.span)),
        }
    }

    fn parse_pair(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.expect(TokenKind::Pair)?.span;
        self.cursor.expect(TokenKind::LParen)?;
        let car = self.parse_expression()?;
        self.cursor.expect(TokenKind::Comma)?;
        let cdr = self.parse_expression()?;
        let end = self.cursor.expect(TokenKind::RParen)?.span;
        self.alloc(ExprKind::Pair { car, cdr }, start.merge(end))
    }

    /// `list(a, b, c)` becomes `pair(a, pair(b, pair(c, nil)))`.
    fn parse_list(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.expect(TokenKind::List)?.span;
        self.cursor.expect(TokenKind::LParen)?;
        let elements = self.parse_expr_list()?;
        let end = self.cursor.previous_span();

        let whole = start.merge(end);

        // The outermost node (the first pair, or `nil` for an empty list)
        // spans the whole `list(...)`.
        let nil_span = if elements.is_empty() { whole } else { end };
        let mut tail = self.alloc(ExprKind::Literal(Sentinel::Nil), nil_span)?;
        for (i, &car) in elements.iter().enumerate().rev() {
            let span = if i == 0 { whole } else { self.span_of(car).merge(end) };
            tail = self.alloc(ExprKind::Pair { car, cdr: tail }, span)?;
        }
        Ok(tail)
    }
}
