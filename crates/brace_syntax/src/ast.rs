//! Abstract Syntax Tree definitions for Brace
//!
//! The tree is a closed sum type: every node kind is a [`Node`] variant and every composite node owns its children
//! outright (`Box` / `Vec`), so the tree has no sharing and no cycles. Literal payloads keep their source text;
//! numeric interpretation belongs to the evaluator.
//!
//! `Display` renders nodes as compact s-expressions for debugging and tests:
//!
//! ```text
//! (function int32 add ((int32 a) (int32 b)) (block (return (+ a b))))
//! ```

use std::fmt;

use brace_core::lang::operators::OperatorId;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Identifier text as written in the source.
pub type Ident = String;

/// A program is the ordered sequence of top-level declarations.
///
/// ## Notes
/// - The parser only ever places [`Node::FunctionDeclaration`] here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub declarations: Vec<Node>,
}

impl Program {
    /// Iterate over the top-level function declarations.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDeclaration> {
        self.declarations.iter().filter_map(|decl| match decl {
            Node::FunctionDeclaration(func) => Some(func),
            _ => None,
        })
    }

    /// Find a top-level function by name.
    pub fn function(&self, name: &str) -> Option<&FunctionDeclaration> {
        self.functions().find(|func| func.identifier == name)
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// Every statement and expression form of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `;`, or the value of a bare `return;`.
    Empty,
    VariableDeclaration(VariableDeclaration),
    FunctionDeclaration(FunctionDeclaration),
    VariableAssignment(VariableAssignment),
    Scope(ScopeDeclaration),
    Conditional(ConditionalStatement),
    WhileLoop(WhileLoopStatement),
    Return(ReturnStatement),
    /// Used both as a statement and as an expression.
    FunctionCall(FunctionCall),
    VariableCall(VariableCall),
    Binary(BinaryOperation),
    Unary(UnaryOperation),
    Cast(CastOperation),
    IntegerLiteral(String),
    FloatLiteral(String),
    BooleanLiteral(bool),
    StringLiteral(String),
}

/// `int32 x = expr;`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub type_name: Ident,
    pub identifier: Ident,
    pub value: Box<Node>,
}

/// `int32 add(int32 a, int32 b) body`
///
/// `param_types` and `param_identifiers` are parallel and always the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub return_type: Ident,
    pub identifier: Ident,
    pub param_types: Vec<Ident>,
    pub param_identifiers: Vec<Ident>,
    pub body: Box<Node>,
}

impl FunctionDeclaration {
    /// Iterate `(type, name)` parameter pairs in declaration order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.param_types
            .iter()
            .zip(&self.param_identifiers)
            .map(|(ty, name)| (ty.as_str(), name.as_str()))
    }

    pub fn arity(&self) -> usize {
        self.param_identifiers.len()
    }
}

/// `x = expr;` (compound forms are already desugared).
#[derive(Debug, Clone, PartialEq)]
pub struct VariableAssignment {
    pub identifier: Ident,
    pub value: Box<Node>,
}

/// `{ ... }`, a lexical block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScopeDeclaration {
    pub statements: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalStatement {
    pub condition: Box<Node>,
    pub pass: Box<Node>,
    /// Absent when there is no `else`.
    pub fail: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoopStatement {
    pub condition: Box<Node>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// [`Node::Empty`] for a bare `return;`.
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub identifier: Ident,
    pub args: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableCall {
    pub identifier: Ident,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperation {
    pub left: Box<Node>,
    pub op: BinaryOp,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOperation {
    pub op: UnaryOp,
    pub operand: Box<Node>,
}

/// `expr as type`
#[derive(Debug, Clone, PartialEq)]
pub struct CastOperation {
    pub operand: Box<Node>,
    pub target_type: Ident,
}

impl Node {
    pub fn binary(left: Node, op: BinaryOp, right: Node) -> Node {
        Node::Binary(BinaryOperation {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    pub fn unary(op: UnaryOp, operand: Node) -> Node {
        Node::Unary(UnaryOperation {
            op,
            operand: Box::new(operand),
        })
    }

    pub fn cast(operand: Node, target_type: impl Into<Ident>) -> Node {
        Node::Cast(CastOperation {
            operand: Box::new(operand),
            target_type: target_type.into(),
        })
    }

    pub fn variable(identifier: impl Into<Ident>) -> Node {
        Node::VariableCall(VariableCall {
            identifier: identifier.into(),
        })
    }

    pub fn call(identifier: impl Into<Ident>, args: Vec<Node>) -> Node {
        Node::FunctionCall(FunctionCall {
            identifier: identifier.into(),
            args,
        })
    }
}

// ============================================================================
// Operators
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Equality
    Eq,
    NotEq,
    // Comparison
    Lt,
    LtEq,
    Gt,
    GtEq,
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    /// Map an infix operator token to its AST operator.
    pub fn from_operator(id: OperatorId) -> Option<BinaryOp> {
        Some(match id {
            OperatorId::EqEq => BinaryOp::Eq,
            OperatorId::NotEq => BinaryOp::NotEq,
            OperatorId::Lt => BinaryOp::Lt,
            OperatorId::LtEq => BinaryOp::LtEq,
            OperatorId::Gt => BinaryOp::Gt,
            OperatorId::GtEq => BinaryOp::GtEq,
            OperatorId::Plus => BinaryOp::Add,
            OperatorId::Minus => BinaryOp::Sub,
            OperatorId::Star => BinaryOp::Mul,
            OperatorId::Slash => BinaryOp::Div,
            OperatorId::Percent => BinaryOp::Rem,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub fn from_operator(id: OperatorId) -> Option<UnaryOp> {
        match id {
            OperatorId::Minus => Some(UnaryOp::Neg),
            OperatorId::Bang => Some(UnaryOp::Not),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Diagnostic dump
// ============================================================================

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Empty => write!(f, "(empty)"),
            Node::VariableDeclaration(decl) => {
                write!(f, "(decl {} {} {})", decl.type_name, decl.identifier, decl.value)
            }
            Node::FunctionDeclaration(func) => {
                write!(f, "(function {} {} (", func.return_type, func.identifier)?;
                for (i, (ty, name)) in func.params().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "({} {})", ty, name)?;
                }
                write!(f, ") {})", func.body)
            }
            Node::VariableAssignment(assign) => write!(f, "(set {} {})", assign.identifier, assign.value),
            Node::Scope(scope) => {
                write!(f, "(block")?;
                for stmt in &scope.statements {
                    write!(f, " {}", stmt)?;
                }
                write!(f, ")")
            }
            Node::Conditional(cond) => {
                write!(f, "(if {} {}", cond.condition, cond.pass)?;
                if let Some(fail) = &cond.fail {
                    write!(f, " {}", fail)?;
                }
                write!(f, ")")
            }
            Node::WhileLoop(lp) => write!(f, "(while {} {})", lp.condition, lp.body),
            Node::Return(ret) => match ret.expr.as_ref() {
                Node::Empty => write!(f, "(return)"),
                expr => write!(f, "(return {})", expr),
            },
            Node::FunctionCall(call) => {
                write!(f, "(call {}", call.identifier)?;
                for arg in &call.args {
                    write!(f, " {}", arg)?;
                }
                write!(f, ")")
            }
            Node::VariableCall(var) => write!(f, "{}", var.identifier),
            Node::Binary(bin) => write!(f, "({} {} {})", bin.op, bin.left, bin.right),
            Node::Unary(un) => write!(f, "({} {})", un.op, un.operand),
            Node::Cast(cast) => write!(f, "(as {} {})", cast.operand, cast.target_type),
            Node::IntegerLiteral(text) | Node::FloatLiteral(text) => write!(f, "{}", text),
            Node::BooleanLiteral(value) => write!(f, "{}", value),
            Node::StringLiteral(text) => write!(f, "\"{}\"", text),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decl) in self.declarations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", decl)?;
        }
        Ok(())
    }
}
