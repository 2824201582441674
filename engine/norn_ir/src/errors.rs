//! Error types shared by the rule DSL and the evaluator.
//!
//! Errors are terminal and absorbing: the evaluator never retries, wraps,
//! or downgrades one to a `false` verdict, and pending data requests are
//! discarded once an error is produced.

use std::fmt;

use crate::Atom;

/// Classifies an evaluation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field or bound variable is absent.
    Key,
    /// Opaque failure forwarded from the loader.
    Loader,
    /// Invalid function metadata, raised at `FunInfo` construction.
    Config,
    /// A callable inside a value template failed.
    Call,
}

/// Terminal evaluation failure.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    pub kind: ErrorKind,
    pub message: String,
}

impl EvalError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        EvalError {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for EvalError {}

// Key Errors

/// A field is missing from a container.
#[cold]
pub fn key_not_found(key: &Atom, container: &str) -> EvalError {
    EvalError::new(ErrorKind::Key, format!("key {key} not found on {container}"))
}

/// A bound variable was consumed without having been captured.
#[cold]
pub fn unbound_variable(key: &Atom) -> EvalError {
    EvalError::new(
        ErrorKind::Key,
        format!("bound variable {key} not bound in condition"),
    )
}

/// A name was resolved on a subject that has no fields.
#[cold]
pub fn not_resolvable(name: &Atom, type_name: &str) -> EvalError {
    EvalError::new(
        ErrorKind::Key,
        format!("cannot resolve {name} on {type_name}"),
    )
}

// Loader Errors

/// Opaque loader failure; the payload is forwarded unchanged.
#[cold]
pub fn loader_failed(payload: impl Into<String>) -> EvalError {
    EvalError::new(ErrorKind::Loader, payload)
}

// Call Errors

/// A template callable failed.
#[cold]
pub fn call_failed(fun: &Atom, message: &str) -> EvalError {
    EvalError::new(ErrorKind::Call, format!("{fun} failed: {message}"))
}

// Config Errors

/// `first`/`last` argument slot on a nullary function.
#[cold]
pub fn arg_slot_on_nullary(slot: &str) -> EvalError {
    EvalError::new(
        ErrorKind::Config,
        format!("{slot} argument slot on a function of arity 0"),
    )
}

/// Positional argument annotation past the function's arity.
#[cold]
pub fn arg_position_out_of_range(index: usize, arity: usize) -> EvalError {
    EvalError::new(
        ErrorKind::Config,
        format!("argument position {index} out of range for arity {arity}"),
    )
}

/// The same argument slot was annotated twice.
#[cold]
pub fn duplicate_arg_slot(index: usize) -> EvalError {
    EvalError::new(
        ErrorKind::Config,
        format!("duplicate annotation for argument {index}"),
    )
}

/// More positional annotations than the function has arguments.
#[cold]
pub fn too_many_arg_infos(given: usize, arity: usize) -> EvalError {
    EvalError::new(
        ErrorKind::Config,
        format!("{given} argument annotations for arity {arity}"),
    )
}
