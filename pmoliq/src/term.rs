//! A small liquidsoap expression builder
//!
//! Writers never interpolate user strings into program text directly;
//! they build [`Term`] values and let the single `Display` serializer
//! render them. String literals are sanitized exactly once, in the
//! serializer, which keeps the injection boundary in one place.

use std::fmt;

use crate::sanitize::sanitize;

/// One liquidsoap expression.
#[derive(Debug, Clone)]
pub enum Term {
    /// A pre-rendered fragment: encoder blocks, predicates, operators the
    /// builder has no dedicated shape for. Never built from user input.
    Raw(String),
    /// A quoted string literal; sanitized at render time.
    Str(String),
    Int(i64),
    /// Rendered with a trailing dot when integral (`5.`, `2.5`), as the
    /// engine's float syntax requires.
    Float(f64),
    Bool(bool),
    /// Reference to a previously assigned variable.
    Var(String),
    List(Vec<Term>),
    /// Function application with positional and labeled arguments.
    Call { func: String, args: Vec<Arg> },
}

/// One argument of a [`Term::Call`].
#[derive(Debug, Clone)]
pub struct Arg {
    pub label: Option<String>,
    pub value: Term,
}

impl Arg {
    /// Positional argument.
    pub fn pos(value: Term) -> Self {
        Self { label: None, value }
    }

    /// Labeled argument (`label=value`).
    pub fn labeled(label: impl Into<String>, value: Term) -> Self {
        Self {
            label: Some(label.into()),
            value,
        }
    }
}

impl Term {
    pub fn raw(text: impl Into<String>) -> Self {
        Term::Raw(text.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        Term::Str(value.into())
    }

    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(name.into())
    }

    pub fn call(func: impl Into<String>, args: Vec<Arg>) -> Self {
        Term::Call {
            func: func.into(),
            args,
        }
    }

    /// Wrap this term as the sole positional argument of `func`.
    pub fn wrapped(self, func: impl Into<String>) -> Self {
        Term::call(func, vec![Arg::pos(self)])
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Raw(text) => write!(f, "{}", text),
            Term::Str(value) => write!(f, "\"{}\"", sanitize(value)),
            Term::Int(value) => write!(f, "{}", value),
            Term::Float(value) => {
                if value.fract() == 0.0 {
                    write!(f, "{:.0}.", value)
                } else {
                    write!(f, "{}", value)
                }
            }
            Term::Bool(value) => write!(f, "{}", value),
            Term::Var(name) => write!(f, "{}", name),
            Term::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Term::Call { func, args } => {
                write!(f, "{}(", func)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match &arg.label {
                        Some(label) => write!(f, "{}={}", label, arg.value)?,
                        None => write!(f, "{}", arg.value)?,
                    }
                }
                write!(f, ")")
            }
        }
    }
}
