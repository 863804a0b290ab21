//! Stack engine of a single calculator.
//!
//! The stack is stored bottom-first in a `Vec`, so the top of the stack is
//! the last element and index 0 of [`Calculator::at`] maps to `len - 1`.
//! A `Calculator` is not synchronized itself; the registry wraps each one in
//! its own mutex.

use rpn_calc_sdk::{Handle, Operator};

use super::error::DomainError;

/// Operands consumed by every binary operator.
const BINARY_ARITY: usize = 2;

/// One independent LIFO stack of `f64` values.
#[derive(Debug, Clone)]
pub struct Calculator {
    handle: Handle,
    stack: Vec<f64>,
    max_depth: Option<usize>,
}

impl Calculator {
    /// Creates an empty calculator.
    ///
    /// `max_depth` caps the number of values the stack may hold; `None`
    /// leaves it bounded only by memory.
    #[must_use]
    pub fn new(handle: Handle, max_depth: Option<usize>) -> Self {
        Self {
            handle,
            stack: Vec::new(),
            max_depth,
        }
    }

    #[must_use]
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Number of values on the stack.
    #[must_use]
    pub fn size(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Pushes `value` as the new top.
    ///
    /// # Errors
    /// `StackDepthLimitReached` at the configured depth, `AllocationFailed`
    /// if the stack cannot grow. The stack is unchanged on error.
    pub fn push(&mut self, value: f64) -> Result<(), DomainError> {
        if let Some(limit) = self.max_depth
            && self.stack.len() >= limit
        {
            return Err(DomainError::StackDepthLimitReached {
                handle: self.handle,
                limit,
            });
        }
        self.stack
            .try_reserve(1)
            .map_err(|e| DomainError::allocation_failed(&e))?;
        self.stack.push(value);
        Ok(())
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    /// `InsufficientOperands` on an empty stack.
    pub fn pop(&mut self) -> Result<f64, DomainError> {
        self.stack.pop().ok_or(DomainError::InsufficientOperands {
            handle: self.handle,
            required: 1,
            available: 0,
        })
    }

    /// Replaces the top two values with `lhs <op> rhs`, where `rhs` is the
    /// top and `lhs` the value beneath it, and returns the result.
    ///
    /// # Errors
    /// `InsufficientOperands` with fewer than two values; the stack is
    /// unchanged in that case.
    ///
    /// # Panics
    /// Never: both pops are covered by the arity check above them.
    pub fn apply(&mut self, op: Operator) -> Result<f64, DomainError> {
        let available = self.stack.len();
        if available < BINARY_ARITY {
            return Err(DomainError::InsufficientOperands {
                handle: self.handle,
                required: BINARY_ARITY,
                available,
            });
        }

        let (Some(rhs), Some(lhs)) = (self.stack.pop(), self.stack.pop()) else {
            unreachable!("stack of {available} values lost its operands");
        };

        let result = op.eval(lhs, rhs);
        // Reuses a slot freed above; never reallocates.
        self.stack.push(result);
        Ok(result)
    }

    /// Reads the value `index` positions below the top without mutating.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= size`.
    pub fn at(&self, index: usize) -> Result<f64, DomainError> {
        let size = self.stack.len();
        self.stack
            .iter()
            .rev()
            .nth(index)
            .copied()
            .ok_or(DomainError::IndexOutOfRange { index, size })
    }

    /// Copy of the stack, top first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<f64> {
        self.stack.iter().rev().copied().collect()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn calc_with(values: &[f64]) -> Calculator {
        let mut calc = Calculator::new(Handle::new(0), None);
        for v in values {
            calc.push(*v).unwrap();
        }
        calc
    }

    #[test]
    fn test_new_is_empty() {
        let calc = Calculator::new(Handle::new(5), None);
        assert_eq!(calc.handle(), Handle::new(5));
        assert_eq!(calc.size(), 0);
        assert!(calc.is_empty());
    }

    #[test]
    fn test_push_then_pop_restores() {
        let mut calc = calc_with(&[1.5]);
        calc.push(-7.25).unwrap();
        assert_eq!(calc.size(), 2);
        assert_eq!(calc.pop().unwrap(), -7.25);
        assert_eq!(calc.size(), 1);
        assert_eq!(calc.at(0).unwrap(), 1.5);
    }

    #[test]
    fn test_pop_empty_is_insufficient() {
        let mut calc = calc_with(&[]);
        let err = calc.pop().unwrap_err();
        assert!(matches!(
            err,
            DomainError::InsufficientOperands {
                required: 1,
                available: 0,
                ..
            }
        ));
        assert_eq!(calc.size(), 0);
    }

    #[test]
    fn test_apply_operand_order() {
        let cases = [
            (Operator::Add, 8.0),
            (Operator::Sub, -2.0),
            (Operator::Mul, 15.0),
            (Operator::Div, 0.6),
        ];
        for (op, expected) in cases {
            let mut calc = calc_with(&[3.0, 5.0]);
            assert_eq!(calc.apply(op).unwrap(), expected, "3 {op} 5");
            assert_eq!(calc.size(), 1);
            assert_eq!(calc.at(0).unwrap(), expected);
        }
    }

    #[test]
    fn test_apply_leaves_deeper_values() {
        let mut calc = calc_with(&[10.0, 4.0, 2.0]);
        assert_eq!(calc.apply(Operator::Mul).unwrap(), 8.0);
        assert_eq!(calc.apply(Operator::Sub).unwrap(), 2.0);
        assert_eq!(calc.snapshot(), vec![2.0]);
    }

    #[test]
    fn test_apply_insufficient_leaves_stack() {
        let mut calc = calc_with(&[]);
        assert!(matches!(
            calc.apply(Operator::Add).unwrap_err(),
            DomainError::InsufficientOperands {
                required: 2,
                available: 0,
                ..
            }
        ));

        let mut calc = calc_with(&[9.0]);
        assert!(matches!(
            calc.apply(Operator::Div).unwrap_err(),
            DomainError::InsufficientOperands { available: 1, .. }
        ));
        assert_eq!(calc.snapshot(), vec![9.0]);
    }

    #[test]
    fn test_divide_by_zero_is_ieee() {
        let mut calc = calc_with(&[1.0, 0.0]);
        let result = calc.apply(Operator::Div).unwrap();
        assert!(result.is_infinite() && result.is_sign_positive());

        let mut calc = calc_with(&[-1.0, 0.0]);
        assert_eq!(calc.apply(Operator::Div).unwrap(), f64::NEG_INFINITY);

        let mut calc = calc_with(&[0.0, 0.0]);
        assert!(calc.apply(Operator::Div).unwrap().is_nan());
        assert_eq!(calc.size(), 1);
    }

    #[test]
    fn test_at_ordering() {
        let calc = calc_with(&[1.0, 2.0, 3.0]);
        assert_eq!(calc.at(0).unwrap(), 3.0);
        assert_eq!(calc.at(1).unwrap(), 2.0);
        assert_eq!(calc.at(2).unwrap(), 1.0);
        assert_eq!(
            calc.at(3).unwrap_err(),
            DomainError::IndexOutOfRange { index: 3, size: 3 }
        );
        assert_eq!(calc.size(), 3);
    }

    #[test]
    fn test_snapshot_is_top_first() {
        let calc = calc_with(&[1.0, 2.0, 3.0]);
        assert_eq!(calc.snapshot(), vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_depth_limit() {
        let mut calc = Calculator::new(Handle::new(2), Some(2));
        calc.push(1.0).unwrap();
        calc.push(2.0).unwrap();
        assert_eq!(
            calc.push(3.0).unwrap_err(),
            DomainError::StackDepthLimitReached {
                handle: Handle::new(2),
                limit: 2
            }
        );
        assert_eq!(calc.snapshot(), vec![2.0, 1.0]);

        // Apply frees a slot.
        calc.apply(Operator::Add).unwrap();
        calc.push(4.0).unwrap();
        assert_eq!(calc.snapshot(), vec![4.0, 3.0]);
    }
}
