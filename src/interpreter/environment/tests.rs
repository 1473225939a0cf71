use super::*;

#[test]
fn define_then_get() {
    let global = Environment::new_global();

    assert_eq!(Ok(Value::Number(5.0)), global.borrow_mut().define("x", Value::Number(5.0)));
    assert_eq!(Ok(Value::Number(5.0)), global.borrow().get("x"));
}

#[test]
fn redefinition_in_same_frame_fails() {
    let global = Environment::new_global();
    global.borrow_mut().define("x", Value::Number(1.0)).unwrap();

    assert_eq!(Err(EnvironmentError::DuplicateDefinition(String::from("x"))),
               global.borrow_mut().define("x", Value::Number(2.0)));
    assert_eq!(Ok(Value::Number(1.0)), global.borrow().get("x"));
}

#[test]
fn shadowing_across_frames_succeeds() {
    let global = Environment::new_global();
    let child = Environment::new_with_parent(Rc::clone(&global));

    assert!(global.borrow_mut().define("x", Value::Number(1.0)).is_ok());
    assert!(child.borrow_mut().define("x", Value::Null).is_ok());

    assert_eq!(Ok(Value::Null), child.borrow().get("x"));
    assert_eq!(Ok(Value::Number(1.0)), global.borrow().get("x"));
}

#[test]
fn get_walks_to_ancestors() {
    let global = Environment::new_global();
    global.borrow_mut().define("x", Value::Number(5.0)).unwrap();

    let middle = Environment::new_with_parent(Rc::clone(&global));
    let child = Environment::new_with_parent(Rc::clone(&middle));

    assert_eq!(Ok(Value::Number(5.0)), child.borrow().get("x"));
    assert!(!child.borrow().contains("x"));
}

#[test]
fn get_undefined_fails() {
    let global = Environment::new_global();
    let child = Environment::new_with_parent(Rc::clone(&global));

    assert_eq!(Err(EnvironmentError::UndefinedVariable(String::from("y"))), child.borrow().get("y"));
}

#[test]
fn assign_overwrites_nearest_binding() {
    let global = Environment::new_global();
    global.borrow_mut().define("x", Value::Number(1.0)).unwrap();

    let child = Environment::new_with_parent(Rc::clone(&global));

    assert_eq!(Ok(Value::Number(9.0)), child.borrow_mut().assign("x", Value::Number(9.0)));
    assert_eq!(Ok(Value::Number(9.0)), global.borrow().get("x"));
    assert!(!child.borrow().contains("x"));

    child.borrow_mut().define("x", Value::Null).unwrap();
    child.borrow_mut().assign("x", Value::Number(3.0)).unwrap();

    assert_eq!(Ok(Value::Number(3.0)), child.borrow().get("x"));
    assert_eq!(Ok(Value::Number(9.0)), global.borrow().get("x"));
}

#[test]
fn assign_never_creates_a_binding() {
    let global = Environment::new_global();

    assert_eq!(Err(EnvironmentError::UndefinedVariable(String::from("x"))),
               global.borrow_mut().assign("x", Value::Number(1.0)));
    assert!(!global.borrow().contains("x"));
}

#[test]
fn resolve_returns_defining_frame() {
    let global = Environment::new_global();
    global.borrow_mut().define("x", Value::Number(1.0)).unwrap();

    let child = Environment::new_with_parent(Rc::clone(&global));
    child.borrow_mut().define("y", Value::Null).unwrap();

    assert!(Rc::ptr_eq(&global, &Environment::resolve(&child, "x").unwrap()));
    assert!(Rc::ptr_eq(&child, &Environment::resolve(&child, "y").unwrap()));
    assert_eq!(Err(EnvironmentError::UndefinedVariable(String::from("z"))),
               Environment::resolve(&child, "z").map(|_| ()));
}

#[test]
fn long_parent_chains_resolve() {
    let global = Environment::new_global();
    global.borrow_mut().define("root", Value::Number(0.0)).unwrap();

    let mut frame = Rc::clone(&global);

    for _ in 0..1_000 {
        frame = Environment::new_with_parent(frame);
    }

    assert_eq!(Ok(Value::Number(0.0)), frame.borrow().get("root"));
    assert!(frame.borrow().parent().is_some());
    assert!(global.borrow().parent().is_none());
}

#[test]
fn error_messages() {
    assert_eq!("Variable 'x' already defined in this scope", EnvironmentError::DuplicateDefinition(String::from("x")).to_string());
    assert_eq!("Undefined variable 'y'", EnvironmentError::UndefinedVariable(String::from("y")).to_string());
}
