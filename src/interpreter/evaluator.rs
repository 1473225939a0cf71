use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use crate::interpreter::ast::{BinaryOperator, Node, Program};
use crate::interpreter::environment::{Environment, EnvironmentError};
use crate::interpreter::value::Value;
use crate::util::ensure_sufficient_stack;


#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
    #[error("Unknown AST node of type {0}")]
    UnknownNode(&'static str),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Evaluates `node` against `environment`.
///
/// Identifiers resolve outwards through the parent chain. Only programs,
/// literals, identifiers and binary expressions have evaluation rules; any
/// other node fails with [`RuntimeError::UnknownNode`].
pub fn evaluate(node: &Node, environment: &Rc<RefCell<Environment>>) -> RuntimeResult<Value> {
    ensure_sufficient_stack(|| match node {
        Node::Program(program) => evaluate_program(program, environment),

        Node::NumericLiteral(value) => Ok(Value::Number(*value)),
        Node::NullLiteral => Ok(Value::Null),
        Node::Identifier(name) => evaluate_identifier(name, environment),
        Node::BinaryExpression { left, operator, right } =>
            evaluate_binary_expression(left, *operator, right, environment),

        Node::StringLiteral(_) | Node::VariableAssignment { .. } | Node::CallExpression { .. }
        | Node::UnaryExpression { .. } | Node::FunctionDeclaration { .. } => Err(RuntimeError::UnknownNode(node.kind())),
    })
}

/// Evaluates each statement in order and yields the last value, or null for
/// an empty program.
pub fn evaluate_program(program: &Program, environment: &Rc<RefCell<Environment>>) -> RuntimeResult<Value> {
    let mut last = Value::Null;

    for statement in &program.body {
        last = evaluate(statement, environment)?;
    }

    tracing::debug!(value = %last, "evaluated program");
    Ok(last)
}

fn evaluate_identifier(name: &str, environment: &Rc<RefCell<Environment>>) -> RuntimeResult<Value> {
    Ok(environment.borrow().get(name)?)
}

fn evaluate_binary_expression(left: &Node, operator: BinaryOperator, right: &Node,
                              environment: &Rc<RefCell<Environment>>) -> RuntimeResult<Value> {
    // Left strictly before right
    let left = evaluate(left, environment)?;
    let right = evaluate(right, environment)?;

    Ok(apply_binary_operator(operator, left, right))
}

/// Combines two evaluated operands.
///
/// Two numbers use plain `f64` arithmetic: division by zero yields an
/// infinity or NaN, and `%` takes the sign of the dividend. If either operand
/// is not a number the result is null rather than an error.
pub fn apply_binary_operator(operator: BinaryOperator, left: Value, right: Value) -> Value {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => Value::Number(match operator {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
            BinaryOperator::Remainder => left % right,
        }),
        (left, right) => {
            tracing::trace!(%operator, left = left.type_name(), right = right.type_name(), "non-numeric operand, result is null");
            Value::Null
        },
    }
}
