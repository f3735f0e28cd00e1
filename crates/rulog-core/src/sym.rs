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

//! Symbol interning.
//!
//! Every textual name in a RULOG program (identifiers, operators, quoted
//! symbols, punctuation) is canonicalized into a [`Symbol`]: a `Copy` handle
//! whose equality and hash are by identity. Two [`Symbol::intern`] calls with
//! equal text always return the same handle, so functor comparison during
//! parsing and unification never touches the underlying bytes.
//!
//! The registry is process-wide and append-only. Interned names are kept for
//! the lifetime of the process; interning is safe from multiple threads.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Process-wide intern table. Names are leaked once so every handle can hand
/// out a `&'static str` without holding the lock.
struct InternTable {
    names: Vec<&'static str>,
    index: HashMap<&'static str, u32>,
}

fn table() -> &'static Mutex<InternTable> {
    static TABLE: OnceLock<Mutex<InternTable>> = OnceLock::new();
    TABLE.get_or_init(|| {
        Mutex::new(InternTable {
            names: Vec::new(),
            index: HashMap::new(),
        })
    })
}

/// An interned, identity-comparable name.
///
/// # Examples
///
/// ```
/// use rulog_core::Symbol;
///
/// let a = Symbol::intern("likes");
/// let b = Symbol::intern("likes");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "likes");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    /// Intern `name`, returning its canonical handle.
    pub fn intern(name: &str) -> Symbol {
        let mut tab = table().lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(&id) = tab.index.get(name) {
            return Symbol(id);
        }
        let id = tab.names.len() as u32;
        let leaked: &'static str = Box::leak(name.to_owned().into_boxed_str());
        tab.names.push(leaked);
        tab.index.insert(leaked, id);
        Symbol(id)
    }

    /// The textual name this handle was interned from.
    pub fn as_str(self) -> &'static str {
        let tab = table().lock().unwrap_or_else(PoisonError::into_inner);
        tab.names[self.0 as usize]
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Symbol {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Symbol {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Symbol::intern(&name))
    }
}
