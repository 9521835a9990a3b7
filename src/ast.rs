use std::{fmt, mem};

use crate::util::stack::ensure_sufficient_stack;

/// The root of a parsed source text.
///
/// A program is an ordered sequence of top-level statements. Every node below
/// it owns its children exclusively; the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The top-level statements, in source order.
    pub statements: Vec<Statement>,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The name being bound.
        name:  Identifier,
        /// The initializer expression.
        value: Expression,
    },
    /// `return <value>;`
    Return {
        /// The returned expression.
        value: Expression,
    },
    /// An expression evaluated for its value, optionally followed by `;`.
    Expression {
        /// The expression.
        expr: Expression,
    },
    /// A braced sequence of statements.
    Block(BlockStatement),
}

/// `{ <statement>* }`, the body of conditionals and function literals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockStatement {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
}

/// A bare name, used both as an expression and as a binding target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The name as written in the source.
    pub name: String,
}

impl Identifier {
    /// Creates an identifier node.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An expression node.
///
/// Cloning, rendering and dropping are all safe on arbitrarily deep trees:
/// the first two grow the stack on demand, and dropping tears the tree down
/// iteratively.
#[derive(Debug, PartialEq, Eq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// A 64-bit signed integer literal.
    IntegerLiteral(i64),
    /// `true` or `false`.
    Boolean(bool),
    /// A prefix operation such as `-x` or `!ok`.
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand expression.
        operand:  Box<Self>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
    },
    /// `if (<condition>) { ... } else { ... }`
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
    },
    /// `fn(<parameters>) { ... }`
    FunctionLiteral {
        /// Parameter names, in declaration order.
        parameters: Vec<Identifier>,
        /// The function body.
        body:       BlockStatement,
    },
    /// `<callee>(<arguments>)`
    Call {
        /// The expression producing the function to call.
        callee:    Box<Self>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
    },
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    /// Logical not (`!x`).
    Bang,
    /// Arithmetic negation (`-x`).
    Minus,
}

/// Represents an infix operator.
///
/// Infix operators include arithmetic, comparisons and boolean logic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InfixOperator {
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Asterisk,
    /// Division (`/`)
    Slash,
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    Lte,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    Gte,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    NotEq,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bang => write!(f, "!"),
            Self::Minus => write!(f, "-"),
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::And => "&&",
            Self::Or => "||",
        };
        write!(f, "{operator}")
    }
}

// The renderings below are load-bearing: runtime error messages and tests
// compare against them, and re-parsing an expression's rendering must give
// back the same rendering.

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|statement| write!(f, "{statement}"))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expr } => write!(f, "{expr}"),
            Self::Block(block) => write!(f, "{block}"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|statement| write!(f, "{statement}"))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.render(f))
    }
}

impl Expression {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Prefix { operator, operand } => write!(f, "({operator}{operand})"),
            Self::Infix { left,
                          operator,
                          right, } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {body}", join(parameters))
            },
            Self::Call { callee, arguments } => write!(f, "{callee}({})", join(arguments)),
        }
    }
}

impl Clone for Expression {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Self::Identifier(identifier) => Self::Identifier(identifier.clone()),
            Self::IntegerLiteral(value) => Self::IntegerLiteral(*value),
            Self::Boolean(value) => Self::Boolean(*value),
            Self::Prefix { operator, operand } => Self::Prefix { operator: *operator,
                                                                 operand:  operand.clone(), },
            Self::Infix { left,
                          operator,
                          right, } => Self::Infix { left:     left.clone(),
                                                    operator: *operator,
                                                    right:    right.clone(), },
            Self::If { condition,
                       consequence,
                       alternative, } => Self::If { condition:   condition.clone(),
                                                    consequence: consequence.clone(),
                                                    alternative: alternative.clone(), },
            Self::FunctionLiteral { parameters, body } => {
                Self::FunctionLiteral { parameters: parameters.clone(),
                                        body:       body.clone(), }
            },
            Self::Call { callee, arguments } => Self::Call { callee:    callee.clone(),
                                                             arguments: arguments.clone(), },
        })
    }
}

impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        // Each popped node has its children detached before it is dropped,
        // so no drop below recurses more than one level.
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl Expression {
    /// Moves every direct and block-nested child expression into `pending`,
    /// leaving leaves in their place.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        match self {
            Self::Identifier(_) | Self::IntegerLiteral(_) | Self::Boolean(_) => {},
            Self::Prefix { operand, .. } => pending.push(take(operand)),
            Self::Infix { left, right, .. } => {
                pending.push(take(left));
                pending.push(take(right));
            },
            Self::If { condition,
                       consequence,
                       alternative, } => {
                pending.push(take(condition));
                consequence.detach_expressions(pending);
                if let Some(alternative) = alternative {
                    alternative.detach_expressions(pending);
                }
            },
            Self::FunctionLiteral { body, .. } => body.detach_expressions(pending),
            Self::Call { callee, arguments } => {
                pending.push(take(callee));
                pending.append(arguments);
            },
        }
    }
}

impl BlockStatement {
    /// Empties the block, moving every expression it holds into `pending`.
    fn detach_expressions(&mut self, pending: &mut Vec<Expression>) {
        let mut blocks = vec![mem::take(&mut self.statements)];
        while let Some(statements) = blocks.pop() {
            for statement in statements {
                match statement {
                    Statement::Let { value, .. } | Statement::Return { value } => pending.push(value),
                    Statement::Expression { expr } => pending.push(expr),
                    Statement::Block(inner) => blocks.push(inner.statements),
                }
            }
        }
    }
}

fn take(expr: &mut Expression) -> Expression {
    mem::replace(expr, Expression::Boolean(false))
}

/// Renders a list of nodes separated by `", "`.
pub(crate) fn join<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
