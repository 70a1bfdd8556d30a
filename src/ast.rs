use std::{mem, rc::Rc};

/// The root of a parsed source text.
///
/// A program is an ordered list of statements executed top to bottom in the
/// global scope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements.
    pub body: Vec<Statement>,
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers everything that produces a value: literals, identifiers,
/// arithmetic and logical operators, assignments, member access, calls and
/// object literals. Every expression is also a valid statement through
/// [`Statement::Expression`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An arithmetic operation (`+ - * / %`).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A prefix operation (`! ++ --`).
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A boolean connective or a comparison.
    Logical {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// `assignee = value`. The assignee is validated when evaluated.
    Assignment {
        /// The target of the assignment.
        assignee: Box<Self>,
        /// The value being assigned.
        value:    Box<Self>,
    },
    /// `object.property` or `object[property]`.
    Member {
        /// The object being accessed.
        object:   Box<Self>,
        /// An identifier for dotted access, any expression when computed.
        property: Box<Self>,
        /// Whether the property was written in brackets.
        computed: bool,
    },
    /// `caller(arguments...)`.
    Call {
        /// The expression producing the callee.
        caller:    Box<Self>,
        /// Arguments to the function.
        arguments: Vec<Self>,
    },
    /// Reference to a binding by name.
    Identifier(String),
    /// A numeric literal.
    NumericLiteral(f64),
    /// A string literal, without its quotes.
    StringLiteral(String),
    /// `{ key: value, shorthand, ... }`.
    ObjectLiteral(Vec<Property>),
}

impl Expr {
    /// Returns a short name for the node kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Binary { .. } => "BinaryExpr",
            Self::Unary { .. } => "UnaryExpr",
            Self::Logical { .. } => "LogicalExpr",
            Self::Assignment { .. } => "AssignmentExpr",
            Self::Member { .. } => "MemberExpr",
            Self::Call { .. } => "CallExpr",
            Self::Identifier(_) => "Identifier",
            Self::NumericLiteral(_) => "NumericLiteral",
            Self::StringLiteral(_) => "StringLiteral",
            Self::ObjectLiteral(_) => "ObjectLiteral",
        }
    }

    /// Moves the direct subexpressions of this node into `out`, leaving
    /// literals in their place.
    fn take_children(&mut self, out: &mut Vec<Self>) {
        match self {
            Self::Binary { left, right, .. } | Self::Logical { left, right, .. } => {
                out.push(mem::replace(&mut **left, Self::NumericLiteral(0.0)));
                out.push(mem::replace(&mut **right, Self::NumericLiteral(0.0)));
            },
            Self::Assignment { assignee: left,
                               value: right, }
            | Self::Member { object: left,
                             property: right,
                             .. } => {
                out.push(mem::replace(&mut **left, Self::NumericLiteral(0.0)));
                out.push(mem::replace(&mut **right, Self::NumericLiteral(0.0)));
            },
            Self::Unary { operand, .. } => out.push(mem::replace(&mut **operand, Self::NumericLiteral(0.0))),
            Self::Call { caller, arguments } => {
                out.push(mem::replace(&mut **caller, Self::NumericLiteral(0.0)));
                out.append(arguments);
            },
            Self::ObjectLiteral(properties) => {
                out.extend(mem::take(properties).into_iter()
                                                .filter_map(|property| property.value));
            },
            Self::Identifier(_) | Self::NumericLiteral(_) | Self::StringLiteral(_) => {},
        }
    }
}

// Source like `1 + 1 + ... + 1` builds trees far deeper than the host stack
// allows recursive drop glue to walk, so nodes are torn down from a worklist.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

/// One entry of an object literal.
///
/// A property without a value is shorthand: its value is looked up from a
/// binding with the same name when the literal is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// The property key.
    pub key:   String,
    /// The explicit value, or `None` for shorthand.
    pub value: Option<Expr>,
}

/// Represents a user-defined function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:       String,
    /// The parameter names, in declaration order.
    pub parameters: Vec<String>,
    /// The statements executed when the function is called.
    pub body:       Vec<Statement>,
}

/// Context for a `for` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    /// Runs once before the first condition check. Either a variable
    /// declaration or an expression statement.
    pub initializer: Option<Box<Statement>>,
    /// Checked before each iteration; a missing condition never stops.
    pub condition:   Option<Expr>,
    /// Runs after each iteration, including iterations ended by `pass`.
    pub increment:   Option<Expr>,
    /// The body of the loop.
    pub body:        Vec<Statement>,
}

/// Represents a statement.
///
/// Statements are the units a program, a function body or a branch is made
/// of.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `mut name [= value]` or `keep name = value`.
    VariableDeclaration {
        /// Whether the binding was declared with `keep`.
        constant: bool,
        /// The name of the variable.
        name:     String,
        /// The initial value; `None` binds Null.
        value:    Option<Expr>,
    },
    /// A user-defined function declaration. Shared with the function values
    /// created from it.
    Function(Rc<FunctionDef>),
    /// `if (condition) { ... } else { ... }`.
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statements run when the condition is truthy.
        then_branch: Vec<Self>,
        /// Statements run otherwise. Empty when there is no `else`.
        else_branch: Vec<Self>,
    },
    /// `while (condition) { ... }`.
    While {
        /// The loop condition.
        condition: Expr,
        /// The body of the loop.
        body:      Vec<Self>,
    },
    /// `for (initializer; condition; increment) { ... }`.
    For(ForLoop),
    /// `break`
    Break,
    /// `pass`, which continues with the next iteration.
    Pass,
    /// `return [value]`.
    Return(Option<Expr>),
    /// A standalone expression evaluated for its result.
    Expression(Expr),
}

impl Statement {
    /// Moves the nested statements of this node into `out`.
    ///
    /// A function body is only taken once no function value shares it.
    fn take_children(&mut self, out: &mut Vec<Self>) {
        match self {
            Self::If { then_branch,
                       else_branch,
                       .. } => {
                out.append(then_branch);
                out.append(else_branch);
            },
            Self::While { body, .. } => out.append(body),
            Self::For(for_loop) => {
                if let Some(initializer) = for_loop.initializer.take() {
                    out.push(*initializer);
                }
                out.append(&mut for_loop.body);
            },
            Self::Function(def) => {
                if let Some(def) = Rc::get_mut(def) {
                    out.append(&mut def.body);
                }
            },
            Self::VariableDeclaration { .. }
            | Self::Break
            | Self::Pass
            | Self::Return(_)
            | Self::Expression(_) => {},
        }
    }
}

impl Drop for Statement {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut statement) = pending.pop() {
            statement.take_children(&mut pending);
        }
    }
}

/// Represents an arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (`!x`).
    Not,
    /// In-place increment (`++x`).
    Increment,
    /// In-place decrement (`--x`).
    Decrement,
}

/// Represents a boolean connective or comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Increment => "++",
            Self::Decrement => "--",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use LogicalOperator::{And, Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual, Or};
        let operator = match self {
            And => "and",
            Or => "or",
            Greater => ">",
            GreaterEqual => ">=",
            Less => "<",
            LessEqual => "<=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}
