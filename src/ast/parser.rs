use crate::ast::{BinaryOp, Node};
use crate::error::CompileError;
use log::debug;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "./expression.pest"] // Link to the grammar file
pub struct FormulaParser;

impl FormulaParser {
    /// Parses formula source text into an evaluation tree. Function calls
    /// and variable references are not resolved here: both are looked up
    /// at evaluation time, so a formula may be compiled before all of its
    /// functions have been registered.
    pub fn parse_source(source: &str) -> Result<Node, CompileError> {
        debug!("parsing formula: {}", source);
        let expression = FormulaParser::parse(Rule::expression, source)
            .map_err(syntax_error)?
            .next()
            .ok_or_else(|| CompileError::Syntax {
                message: "empty parse result".to_string(),
                position: 0,
            })?;

        // expression wraps a single expr followed by EOI.
        let expr = expression.into_inner().next().ok_or_else(|| {
            CompileError::Syntax {
                message: "empty expression".to_string(),
                position: 0,
            }
        })?;
        let node = Self::build_expr(expr)?;
        debug!("built evaluation tree: {:?}", node);
        Ok(node)
    }

    fn build_expr(pair: Pair<Rule>) -> Result<Node, CompileError> {
        let mut pairs = pair.into_inner();
        let mut node = Self::build_term(pairs.next().unwrap())?;

        while let Some(op_pair) = pairs.next() {
            let op = Self::build_op(&op_pair)?;
            let rhs = Self::build_term(pairs.next().unwrap())?;
            node = Node::Binary {
                op,
                lhs: Box::new(node),
                rhs: Box::new(rhs),
            };
        }

        Ok(node)
    }

    fn build_term(pair: Pair<Rule>) -> Result<Node, CompileError> {
        let mut pairs = pair.into_inner();
        let mut node = Self::build_factor(pairs.next().unwrap())?;

        while let Some(op_pair) = pairs.next() {
            let op = Self::build_op(&op_pair)?;
            let rhs = Self::build_factor(pairs.next().unwrap())?;
            node = Node::Binary {
                op,
                lhs: Box::new(node),
                rhs: Box::new(rhs),
            };
        }

        Ok(node)
    }

    fn build_op(pair: &Pair<Rule>) -> Result<BinaryOp, CompileError> {
        BinaryOp::try_from(pair.as_str()).map_err(|message| CompileError::Syntax {
            message,
            position: pair.as_span().start(),
        })
    }

    fn build_factor(pair: Pair<Rule>) -> Result<Node, CompileError> {
        let inner = pair.into_inner().next().unwrap();
        match inner.as_rule() {
            Rule::number => Self::build_number(&inner),
            Rule::call => Self::build_call(inner),
            Rule::ident => Ok(Node::Variable {
                name: inner.as_str().to_string(),
                pos: inner.as_span().start(),
            }),
            Rule::expr => Self::build_expr(inner),
            rule => Err(CompileError::Syntax {
                message: format!("unexpected rule {:?}", rule),
                position: inner.as_span().start(),
            }),
        }
    }

    /// Builds a literal node. Dotless, exponent-less literals go through
    /// i64 so that out-of-range integers are reported instead of silently
    /// saturating; everything else parses as f64 directly.
    fn build_number(pair: &Pair<Rule>) -> Result<Node, CompileError> {
        let literal = pair.as_str();
        let position = pair.as_span().start();
        let value = if literal.contains(['.', 'e', 'E']) {
            let value = literal
                .parse::<f64>()
                .map_err(|err| CompileError::Literal {
                    literal: literal.to_string(),
                    position,
                    reason: err.to_string(),
                })?;
            // The grammar admits no inf spelling: an infinite result is
            // overflow, and zero from a nonzero significand is underflow.
            if value.is_infinite() || (value == 0.0 && significand_has_nonzero_digit(literal)) {
                return Err(CompileError::Literal {
                    literal: literal.to_string(),
                    position,
                    reason: "value out of range for f64".to_string(),
                });
            }
            value
        } else {
            literal
                .parse::<i64>()
                .map_err(|err| CompileError::Literal {
                    literal: literal.to_string(),
                    position,
                    reason: err.to_string(),
                })? as f64
        };
        Ok(Node::Number(value))
    }

    fn build_call(pair: Pair<Rule>) -> Result<Node, CompileError> {
        let pos = pair.as_span().start();
        let mut pairs = pair.into_inner();
        let name = pairs.next().unwrap().as_str().to_string();
        debug!("parsing call to '{}' at offset {}", name, pos);

        let mut args = Vec::new();
        if let Some(arg_list) = pairs.next() {
            for arg in arg_list.into_inner() {
                args.push(Self::build_expr(arg)?);
            }
        }

        Ok(Node::Call { name, pos, args })
    }
}

fn significand_has_nonzero_digit(literal: &str) -> bool {
    let significand = literal.split(['e', 'E']).next().unwrap_or(literal);
    significand.bytes().any(|b| matches!(b, b'1'..=b'9'))
}

fn syntax_error(err: pest::error::Error<Rule>) -> CompileError {
    let position = match err.location {
        InputLocation::Pos(pos) => pos,
        InputLocation::Span((start, _)) => start,
    };
    CompileError::Syntax {
        message: err.variant.message().to_string(),
        position,
    }
}
