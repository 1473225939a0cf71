use std::fmt::{Display, Formatter};


/// Runtime result of evaluating a node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Value {
    Number(f64),
    #[default]
    Null,
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Null => "null",
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(value) => write!(f, "{}", value),
            Value::Null => f.write_str("null"),
        }
    }
}
