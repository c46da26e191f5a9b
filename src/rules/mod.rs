//! Rule pipeline turning a pull-request snapshot into a decision.

pub mod evaluator;
pub mod selection;
