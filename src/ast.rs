use crate::distribution::DistributionSpec;

/// An expression tree for the right-hand side of a line.
///
/// Leaves are number literals, variable references and distribution
/// literals; inner nodes apply unary or binary operators.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A scalar number literal, already scaled by its suffix.
    Literal {
        /// The constant value.
        value: f64,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// An uncertain literal, such as `10 20` or `normal(100, 15)`. Each
    /// evaluation draws a fresh anonymous sample array.
    Distribution {
        /// How the distribution was written.
        spec: DistributionSpec,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

/// Binary operators, from `+` to `^`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%` standing alone (not glued to a number literal).
    Mod,
    /// `^`
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        f.write_str(symbol)
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
}

/// One parsed source line.
///
/// Statements are produced fresh for each line and dropped once the line has
/// been executed.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A full-line comment. `text` is everything after the leading `#`.
    Comment {
        /// The comment body.
        text: String,
    },
    /// A blank or whitespace-only line.
    Empty,
    /// `name = expression`, optionally followed by `# comment`.
    Assignment {
        /// The variable being bound.
        name:    String,
        /// The right-hand side.
        expr:    Expr,
        /// The trailing comment, kept for display only.
        comment: Option<String>,
    },
    /// A bare expression evaluated without binding a name.
    Expression {
        /// The expression to evaluate.
        expr:    Expr,
        /// The trailing comment, kept for display only.
        comment: Option<String>,
    },
}
