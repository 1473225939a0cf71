use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;
use crate::interpreter::value::Value;

#[cfg(test)]
mod tests;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("Variable '{0}' already defined in this scope")]
    DuplicateDefinition(String),
    #[error("Undefined variable '{0}'")]
    UndefinedVariable(String),
}

pub type EnvironmentResult<T> = Result<T, EnvironmentError>;

/// A single scope frame. Children hold a strong reference to their parent, so
/// a parent frame lives at least as long as any frame that resolves through it.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
    parent: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new_global() -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment::default()))
    }

    pub fn new_with_parent(parent: Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            variables: HashMap::new(),
            parent: Some(parent),
        }))
    }

    pub fn parent(&self) -> Option<Rc<RefCell<Environment>>> {
        self.parent.as_ref().map(Rc::clone)
    }

    /// Whether `name` is bound in this frame, ignoring parents.
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Binds `name` in this frame. Parent frames are not checked, so shadowing
    /// an outer binding is allowed.
    pub fn define(&mut self, name: &str, value: Value) -> EnvironmentResult<Value> {
        if self.contains(name) {
            return Err(EnvironmentError::DuplicateDefinition(name.to_owned()));
        }

        self.variables.insert(name.to_owned(), value);
        Ok(value)
    }

    /// Overwrites the nearest existing binding of `name`. Never creates one.
    pub fn assign(&mut self, name: &str, value: Value) -> EnvironmentResult<Value> {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
            return Ok(value);
        }

        let frame = self.resolve_in_parents(name)?;
        frame.borrow_mut().variables.insert(name.to_owned(), value);

        Ok(value)
    }

    pub fn get(&self, name: &str) -> EnvironmentResult<Value> {
        if let Some(value) = self.variables.get(name) {
            return Ok(*value);
        }

        let frame = self.resolve_in_parents(name)?;
        let value = frame.borrow().variables.get(name).copied();

        value.ok_or_else(|| EnvironmentError::UndefinedVariable(name.to_owned()))
    }

    /// Finds the nearest frame, starting at `this` and walking outwards, that
    /// binds `name`.
    pub fn resolve(this: &Rc<RefCell<Environment>>, name: &str) -> EnvironmentResult<Rc<RefCell<Environment>>> {
        if this.borrow().contains(name) {
            return Ok(Rc::clone(this));
        }

        this.borrow().resolve_in_parents(name)
    }

    fn resolve_in_parents(&self, name: &str) -> EnvironmentResult<Rc<RefCell<Environment>>> {
        let mut current = self.parent();

        while let Some(frame) = current {
            if frame.borrow().contains(name) {
                return Ok(frame);
            }

            current = frame.borrow().parent();
        }

        Err(EnvironmentError::UndefinedVariable(name.to_owned()))
    }
}
