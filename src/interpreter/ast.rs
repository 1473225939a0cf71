use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl BinaryOperator {
    pub fn from_source(source: &str) -> Option<BinaryOperator> {
        match source {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Subtract),
            "*" => Some(BinaryOperator::Multiply),
            "/" => Some(BinaryOperator::Divide),
            "%" => Some(BinaryOperator::Remainder),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Remainder => "%",
        }
    }

    pub fn is_additive(&self) -> bool {
        matches!(self, BinaryOperator::Add | BinaryOperator::Subtract)
    }

    pub fn is_multiplicative(&self) -> bool {
        !self.is_additive()
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Root of one parsed source unit. The body may be empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub body: Vec<Node>,
}

impl Program {
    pub fn new(body: Vec<Node>) -> Program {
        Program { body }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut stack = Vec::new();
        push_joined(&mut stack, &self.body, "; ");

        write_pieces(f, stack)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Program(Program),

    Identifier(String),
    NumericLiteral(f64),
    StringLiteral(String),
    NullLiteral,

    BinaryExpression {
        left: Box<Node>,
        operator: BinaryOperator,
        right: Box<Node>,
    },

    // Reserved; the parser does not produce these yet
    VariableAssignment {
        name: String,
        value: Box<Node>,
    },
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    UnaryExpression {
        operator: String,
        operand: Box<Node>,
    },
    FunctionDeclaration {
        name: String,
        parameters: Vec<String>,
        body: Vec<Node>,
    },
}

impl Node {
    pub fn binary(left: Node, operator: BinaryOperator, right: Node) -> Node {
        Node::BinaryExpression { left: Box::new(left), operator, right: Box::new(right) }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Node::Program(_) => "Program",
            Node::Identifier(_) => "Identifier",
            Node::NumericLiteral(_) => "NumericLiteral",
            Node::StringLiteral(_) => "StringLiteral",
            Node::NullLiteral => "NullLiteral",
            Node::BinaryExpression { .. } => "BinaryExpression",
            Node::VariableAssignment { .. } => "VariableAssignment",
            Node::CallExpression { .. } => "CallExpression",
            Node::UnaryExpression { .. } => "UnaryExpression",
            Node::FunctionDeclaration { .. } => "FunctionDeclaration",
        }
    }
}

impl From<Program> for Node {
    fn from(program: Program) -> Self {
        Node::Program(program)
    }
}

impl Node {
    /// Moves every direct child of this node onto `stack`, leaving it a leaf.
    fn take_children(&mut self, stack: &mut Vec<Node>) {
        match self {
            Node::Program(program) => stack.append(&mut program.body),
            Node::BinaryExpression { left, right, .. } => {
                stack.push(std::mem::replace(&mut **left, Node::NullLiteral));
                stack.push(std::mem::replace(&mut **right, Node::NullLiteral));
            },
            Node::VariableAssignment { value, .. } => stack.push(std::mem::replace(&mut **value, Node::NullLiteral)),
            Node::CallExpression { callee, arguments } => {
                stack.push(std::mem::replace(&mut **callee, Node::NullLiteral));
                stack.append(arguments);
            },
            Node::UnaryExpression { operand, .. } => stack.push(std::mem::replace(&mut **operand, Node::NullLiteral)),
            Node::FunctionDeclaration { body, .. } => stack.append(body),
            Node::Identifier(_) | Node::NumericLiteral(_) | Node::StringLiteral(_) | Node::NullLiteral => {},
        }
    }
}

// Left-nested chains like `1 + 1 + ... + 1` are as deep as they are long, so
// both dropping and printing walk the tree with an explicit stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.take_children(&mut stack);

        while let Some(mut node) = stack.pop() {
            node.take_children(&mut stack);
        }
    }
}

enum Piece<'a> {
    Tree(&'a Node),
    Text(&'a str),
}

fn push_joined<'a>(stack: &mut Vec<Piece<'a>>, nodes: &'a [Node], separator: &'static str) {
    for (index, node) in nodes.iter().enumerate().rev() {
        stack.push(Piece::Tree(node));

        if index > 0 {
            stack.push(Piece::Text(separator));
        }
    }
}

fn write_pieces(f: &mut Formatter<'_>, mut stack: Vec<Piece<'_>>) -> std::fmt::Result {
    while let Some(piece) = stack.pop() {
        let node = match piece {
            Piece::Text(text) => {
                f.write_str(text)?;
                continue;
            },
            Piece::Tree(node) => node,
        };

        match node {
            Node::Program(program) => push_joined(&mut stack, &program.body, "; "),

            Node::Identifier(name) => f.write_str(name)?,
            Node::NumericLiteral(value) => write!(f, "{}", value)?,
            Node::StringLiteral(value) => write!(f, "\"{}\"", value)?,
            Node::NullLiteral => f.write_str("null")?,

            Node::BinaryExpression { left, operator, right } => stack.extend([
                Piece::Text(")"), Piece::Tree(&**right), Piece::Text(" "),
                Piece::Text(operator.symbol()), Piece::Text(" "), Piece::Tree(&**left), Piece::Text("("),
            ]),

            Node::VariableAssignment { name, value } =>
                stack.extend([Piece::Tree(&**value), Piece::Text(" = "), Piece::Text(name), Piece::Text("var ")]),
            Node::CallExpression { callee, arguments } => {
                stack.push(Piece::Text(")"));
                push_joined(&mut stack, arguments, ", ");
                stack.extend([Piece::Text("("), Piece::Tree(&**callee)]);
            },
            Node::UnaryExpression { operator, operand } =>
                stack.extend([Piece::Text(")"), Piece::Tree(&**operand), Piece::Text(operator), Piece::Text("(")]),
            Node::FunctionDeclaration { name, parameters, body } => {
                stack.push(Piece::Text(" }"));
                push_joined(&mut stack, body, "; ");
                stack.push(Piece::Text(") { "));

                for (index, parameter) in parameters.iter().enumerate().rev() {
                    stack.push(Piece::Text(parameter));

                    if index > 0 {
                        stack.push(Piece::Text(", "));
                    }
                }

                stack.extend([Piece::Text("("), Piece::Text(name), Piece::Text("fn ")]);
            },
        }
    }

    Ok(())
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_pieces(f, vec![Piece::Tree(self)])
    }
}
