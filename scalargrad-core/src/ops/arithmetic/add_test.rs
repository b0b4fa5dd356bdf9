use super::*;
use crate::graph::Graph;
use crate::utils::testing::check_value_near;

#[test]
fn test_add_forward_and_parents() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let a = graph.named_leaf("a", 2.0);
    let b = graph.named_leaf("b", 3.0);
    let s = add_op(&a, &b)?;
    assert_eq!(s.data(), 5.0);
    assert_eq!(s.op(), Op::Add);
    let parents: Vec<_> = s.parents().iter().map(|p| p.id()).collect();
    assert_eq!(parents, vec![a.id(), b.id()]);
    Ok(())
}

#[test]
fn test_add_backward() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(3.0);
    let s = add_op(&a, &b)?;
    s.backward()?;
    check_value_near(&s, 5.0, 1.0, 0.0);
    check_value_near(&a, 2.0, 1.0, 0.0);
    check_value_near(&b, 3.0, 1.0, 0.0);
    Ok(())
}

#[test]
fn test_add_same_operand_twice() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let a = graph.leaf(-4.0);
    let s = add_op(&a, &a)?;
    s.backward()?;
    assert_eq!(s.data(), -8.0);
    assert_eq!(a.grad(), 2.0);
    Ok(())
}

#[test]
fn test_add_scalar_operand() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let a = graph.leaf(1.5);
    let s = add_op(&a, 2)?;
    s.backward()?;
    assert_eq!(s.data(), 3.5);
    assert_eq!(a.grad(), 1.0);
    assert_eq!(s.parents()[1].grad(), 1.0);
    Ok(())
}
