//! Normalized per-function argument metadata.
//!
//! Rule authors annotate template functions with per-argument hints
//! (`preload_scope`, `atom_to_scope`) keyed by position or by the `first`,
//! `last`, and `all` slots. `FunInfo::new` normalizes those annotations
//! into a fixed-arity list so the evaluator never has to interpret slot
//! keys at evaluation time.

use crate::errors::{
    arg_position_out_of_range, arg_slot_on_nullary, duplicate_arg_slot, too_many_arg_infos,
};
use crate::{Atom, EvalError};

/// Per-argument metadata after normalization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArgInfo {
    /// Preload the scope the argument refers to.
    pub preload_scope: bool,
    /// Translate an atom argument into its scope.
    pub atom_to_scope: bool,
}

/// A tri-state override merged onto a default `ArgInfo`.
///
/// `Some(false)` is an explicit opt-out and wins over an inherited `true`;
/// `None` inherits the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArgInfoSpec {
    pub preload_scope: Option<bool>,
    pub atom_to_scope: Option<bool>,
}

impl ArgInfo {
    fn merged(default: ArgInfo, spec: ArgInfoSpec) -> ArgInfo {
        ArgInfo {
            preload_scope: spec.preload_scope.unwrap_or(default.preload_scope),
            atom_to_scope: spec.atom_to_scope.unwrap_or(default.atom_to_scope),
        }
    }
}

/// Which argument position(s) an annotation applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgSlot {
    /// Position 0.
    First,
    /// Position `arity - 1`.
    Last,
    /// Every position; becomes the default seed for unannotated arguments.
    All,
    /// An explicit zero-based position.
    Position(usize),
}

/// Raw per-function argument annotations, before normalization.
#[derive(Clone, Debug)]
pub enum ArgSpec {
    /// Slot-keyed annotations (the map form of the surface DSL).
    Slots(Vec<(ArgSlot, ArgInfoSpec)>),
    /// A positional prefix (the list form); the tail is padded with empty
    /// `ArgInfo`s.
    List(Vec<ArgInfo>),
}

impl ArgSpec {
    /// No annotations: every argument gets the empty `ArgInfo`.
    pub fn none() -> Self {
        ArgSpec::Slots(Vec::new())
    }
}

/// Immutable description of a named template function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunInfo {
    pub module: Atom,
    pub name: Atom,
    pub arity: usize,
    /// One entry per argument position.
    pub args: Vec<ArgInfo>,
    pub can_return_scope: bool,
    pub warn_not_ok: bool,
    pub warn_always: bool,
}

impl FunInfo {
    /// Normalize raw annotations into a fixed-arity description.
    pub fn new(
        module: impl Into<Atom>,
        name: impl Into<Atom>,
        arity: usize,
        spec: ArgSpec,
    ) -> Result<FunInfo, EvalError> {
        Ok(FunInfo {
            module: module.into(),
            name: name.into(),
            arity,
            args: normalize(arity, spec)?,
            can_return_scope: false,
            warn_not_ok: false,
            warn_always: false,
        })
    }

    /// Mark the function as able to return a scope.
    #[must_use]
    pub fn can_return_scope(mut self) -> Self {
        self.can_return_scope = true;
        self
    }

    /// Warn when the function does not return successfully.
    #[must_use]
    pub fn warn_not_ok(mut self) -> Self {
        self.warn_not_ok = true;
        self
    }

    /// Warn on every application of the function.
    #[must_use]
    pub fn warn_always(mut self) -> Self {
        self.warn_always = true;
        self
    }
}

fn normalize(arity: usize, spec: ArgSpec) -> Result<Vec<ArgInfo>, EvalError> {
    match spec {
        ArgSpec::Slots(entries) => {
            // Pop the `all` slot first: it seeds the default the other
            // slots merge over, regardless of where it appears.
            let mut default = ArgInfo::default();
            let mut seen_all = false;
            for (slot, over) in &entries {
                if matches!(slot, ArgSlot::All) {
                    if seen_all {
                        return Err(duplicate_arg_slot(arity));
                    }
                    seen_all = true;
                    default = ArgInfo::merged(default, *over);
                }
            }

            let mut overrides: Vec<Option<ArgInfoSpec>> = vec![None; arity];
            for (slot, over) in entries {
                let index = match slot {
                    ArgSlot::All => continue,
                    ArgSlot::First => {
                        if arity == 0 {
                            return Err(arg_slot_on_nullary("first"));
                        }
                        0
                    }
                    ArgSlot::Last => arity
                        .checked_sub(1)
                        .ok_or_else(|| arg_slot_on_nullary("last"))?,
                    ArgSlot::Position(index) => {
                        if index >= arity {
                            return Err(arg_position_out_of_range(index, arity));
                        }
                        index
                    }
                };
                if overrides[index].is_some() {
                    return Err(duplicate_arg_slot(index));
                }
                overrides[index] = Some(over);
            }

            Ok(overrides
                .into_iter()
                .map(|over| over.map_or(default, |o| ArgInfo::merged(default, o)))
                .collect())
        }
        ArgSpec::List(infos) => {
            if infos.len() > arity {
                return Err(too_many_arg_infos(infos.len(), arity));
            }
            let mut args = infos;
            args.resize(arity, ArgInfo::default());
            Ok(args)
        }
    }
}
