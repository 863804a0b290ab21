//! RPN calculator API trait
//!
//! Contract trait for the RPN calculator module.

use crate::error::RpnCalcError;
use crate::models::Handle;

/// RPN calculator API trait
///
/// Every calculator is an independent stack of `f64` values addressed by a
/// [`Handle`]. Operations on one handle never observe or block on another.
/// All methods are synchronous; they only ever wait briefly on a lock.
pub trait RpnCalcClient: Send + Sync {
    /// Create a new calculator with an empty stack.
    ///
    /// # Errors
    /// `OutOfMemory` if the calculator cannot be allocated.
    fn create(&self) -> Result<Handle, RpnCalcError>;

    /// Destroy a calculator and every value on its stack.
    ///
    /// # Errors
    /// `NotFound` if the handle is not live.
    fn delete(&self, handle: Handle) -> Result<(), RpnCalcError>;

    /// Push a value onto the top of the stack.
    ///
    /// # Errors
    /// `NotFound` for an unknown handle, `OutOfMemory` if the stack cannot grow.
    fn push(&self, handle: Handle, value: f64) -> Result<(), RpnCalcError>;

    /// Pop and return the top of the stack.
    ///
    /// # Errors
    /// `NotFound` for an unknown handle, `Insufficient` on an empty stack.
    fn pop(&self, handle: Handle) -> Result<f64, RpnCalcError>;

    /// Apply a binary operator (`+`, `-`, `*`, `/`) to the top two values and
    /// return the result, which replaces them on the stack.
    ///
    /// # Errors
    /// `NotFound` for an unknown handle, `Invalid` for an unknown symbol,
    /// `Insufficient` if fewer than two values are present.
    fn apply(&self, handle: Handle, symbol: char) -> Result<f64, RpnCalcError>;

    /// Number of values on the stack.
    ///
    /// # Errors
    /// `NotFound` for an unknown handle.
    fn size(&self, handle: Handle) -> Result<usize, RpnCalcError>;

    /// Read the value `index` positions below the top (0 is the top).
    ///
    /// # Errors
    /// `NotFound` for an unknown handle, `Invalid` if `index >= size`.
    fn at(&self, handle: Handle, index: usize) -> Result<f64, RpnCalcError>;

    /// Read the top of the stack without popping it.
    ///
    /// # Errors
    /// Same as [`RpnCalcClient::at`] with index 0.
    fn top(&self, handle: Handle) -> Result<f64, RpnCalcError> {
        self.at(handle, 0)
    }

    /// Copy of the whole stack, top first.
    ///
    /// # Errors
    /// `NotFound` for an unknown handle.
    fn snapshot(&self, handle: Handle) -> Result<Vec<f64>, RpnCalcError>;
}
