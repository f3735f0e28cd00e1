// Dweve RULOG - Rule Logic Language
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The term model: the parser's unified output value type.
//!
//! A [`Term`] is a scalar leaf, a bare symbol, an ordered sequence, or a
//! compound [`Call`]. Operator applications are themselves `Call` terms whose
//! functor is the operator symbol, so `1 + 2` and `plus(1, 2)` share one
//! representation.

use crate::sym::Symbol;

/// A parsed term.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Term {
    /// The literal absence of a value. Never produced by the parser (textual
    /// `null` reads as an ordinary symbol); reserved for engine use.
    Null,
    /// Boolean literal (`true`/`false`).
    Bool(bool),
    /// 32-bit signed integer literal.
    Int(i32),
    /// Floating-point literal.
    Float(f64),
    /// String literal, escapes already resolved.
    Str(String),
    /// A bare interned symbol used as an atom.
    Sym(Symbol),
    /// An ordered, fixed-size sequence of terms.
    Seq(Vec<Term>),
    /// A compound call term: a named, fixed-arity node.
    Call(Call),
}

/// A compound term: an interned functor applied to a fixed argument list.
///
/// `Call` is an immutable record. Its logical length is `args.len() + 1`,
/// with index 0 naming the functor and index `i > 0` addressing
/// `args[i - 1]`; building a different arity means building a new `Call`.
///
/// # Examples
///
/// ```
/// use rulog_core::{Call, Symbol, Term};
///
/// let call = Call::new(Symbol::intern("edge"), vec![Term::Int(1), Term::Int(2)]);
/// assert_eq!(call.len(), 3);
/// assert_eq!(call.get(0), Some(Term::Sym(Symbol::intern("edge"))));
/// assert_eq!(call.get(2), Some(Term::Int(2)));
///
/// let wider = call.with_arg(Term::Int(3));
/// assert_eq!(wider.len(), 4);
/// assert_eq!(call.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Call {
    functor: Symbol,
    args: Vec<Term>,
}

impl Call {
    /// Creates a call term from a functor and its arguments.
    pub fn new(functor: Symbol, args: Vec<Term>) -> Self {
        Self { functor, args }
    }

    /// The functor naming this compound term.
    #[inline]
    pub fn functor(&self) -> Symbol {
        self.functor
    }

    /// The argument list (excluding the functor).
    #[inline]
    pub fn args(&self) -> &[Term] {
        &self.args
    }

    /// Number of arguments.
    #[inline]
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Logical length: arity plus one for the functor slot.
    #[inline]
    pub fn len(&self) -> usize {
        self.args.len() + 1
    }

    /// Always `false`: the functor slot is always occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Positional read over the logical view: index 0 is the functor as a
    /// term, index `i > 0` is `args[i - 1]`.
    pub fn get(&self, index: usize) -> Option<Term> {
        if index == 0 {
            Some(Term::Sym(self.functor))
        } else {
            self.args.get(index - 1).cloned()
        }
    }

    /// Returns a new call with one argument appended. The receiver is
    /// unchanged; arity is fixed at construction.
    pub fn with_arg(&self, arg: Term) -> Call {
        let mut args = self.args.clone();
        args.push(arg);
        Call {
            functor: self.functor,
            args,
        }
    }
}

impl Term {
    /// Builds a compound call term.
    pub fn call(functor: Symbol, args: Vec<Term>) -> Term {
        Term::Call(Call::new(functor, args))
    }

    /// Interns `name` and wraps it as a bare symbol term.
    pub fn sym(name: &str) -> Term {
        Term::Sym(Symbol::intern(name))
    }

    /// Returns `true` if this term is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Term::Null)
    }

    /// Try to get the term as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Term::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the term as an integer.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Term::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the term as a float; integers widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Term::Float(x) => Some(*x),
            Term::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to get the term as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Term::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the term as a bare symbol.
    pub fn as_sym(&self) -> Option<Symbol> {
        match self {
            Term::Sym(s) => Some(*s),
            _ => None,
        }
    }

    /// Try to get the term as a sequence.
    pub fn as_seq(&self) -> Option<&[Term]> {
        match self {
            Term::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get the term as a compound call.
    pub fn as_call(&self) -> Option<&Call> {
        match self {
            Term::Call(c) => Some(c),
            _ => None,
        }
    }
}
