use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::core::{BUILTIN_TABLE, Builtin},
        },
        value::core::Value,
    },
};

/// Named constants available in every session.
pub const CONSTANTS: &[(&str, fn() -> Value)] =
    &[("pi", || Value::from_f64(std::f64::consts::PI)),
      ("e", || Value::from_f64(std::f64::consts::E)),
      ("tau", || Value::from_f64(std::f64::consts::TAU)),
      ("inf", || Value::Infinite { negative: false }),
      ("nan", || Value::NaN)];

/// An entry of the symbol table.
#[derive(Clone)]
pub enum Symbol {
    /// A fixed named value such as `pi`.
    Constant(Value),
    /// A builtin unary function such as `sqrt`.
    Function(Builtin),
    /// A value stored by an assignment.
    Variable(Value),
}

/// Maps every known name to its symbol.
///
/// Constants and functions are seeded at construction and never change, so a
/// single lookup decides whether a name may be assigned.
pub struct SymbolTable {
    entries: HashMap<String, Symbol>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Creates a table holding the builtin constants and functions.
    #[must_use]
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        for (name, value) in CONSTANTS {
            entries.insert((*name).to_string(), Symbol::Constant(value()));
        }
        for builtin in BUILTIN_TABLE {
            entries.insert(builtin.name.to_string(), Symbol::Function(*builtin));
        }
        Self { entries }
    }

    /// Returns the value of a variable, ignoring constants and functions.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        match self.entries.get(name) {
            Some(Symbol::Variable(value)) => Some(value),
            _ => None,
        }
    }

    /// Resolves a bare name to a constant or variable value.
    ///
    /// # Errors
    /// `UndefinedVariable` when the name is unknown or names a function.
    ///
    /// # Example
    /// ```
    /// use calcparse::interpreter::evaluator::symbols::SymbolTable;
    ///
    /// let symbols = SymbolTable::new();
    /// assert!(symbols.lookup_value("tau", 1).is_ok());
    /// assert!(symbols.lookup_value("sqrt", 1).is_err());
    /// assert!(symbols.lookup_value("y", 1).is_err());
    /// ```
    pub fn lookup_value(&self, name: &str, line: usize) -> EvalResult<Value> {
        match self.entries.get(name) {
            Some(Symbol::Constant(value) | Symbol::Variable(value)) => Ok(value.clone()),
            _ => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                       line }),
        }
    }

    /// Resolves a called name to a builtin function.
    ///
    /// # Errors
    /// `UndefinedVariable` when the name is not a function.
    pub fn lookup_function(&self, name: &str, line: usize) -> EvalResult<Builtin> {
        match self.entries.get(name) {
            Some(Symbol::Function(builtin)) => Ok(*builtin),
            _ => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                       line }),
        }
    }

    /// Stores `value` under `name`, creating or overwriting a variable.
    ///
    /// # Errors
    /// `KeywordTaken` when the name is a constant or a function.
    ///
    /// # Example
    /// ```
    /// use calcparse::interpreter::{evaluator::symbols::SymbolTable, value::core::Value};
    ///
    /// let mut symbols = SymbolTable::new();
    /// symbols.assign("x", Value::integer(5), 1).unwrap();
    /// assert_eq!(symbols.variable("x"), Some(&Value::integer(5)));
    ///
    /// assert!(symbols.assign("pi", Value::integer(3), 2).is_err());
    /// assert!(symbols.assign("sin", Value::integer(3), 3).is_err());
    /// ```
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        match self.entries.get_mut(name) {
            Some(Symbol::Constant(_) | Symbol::Function(_)) => {
                Err(RuntimeError::KeywordTaken { name: name.to_string(),
                                                 line })
            },
            Some(Symbol::Variable(slot)) => {
                *slot = value;
                Ok(())
            },
            None => {
                self.entries.insert(name.to_string(), Symbol::Variable(value));
                Ok(())
            },
        }
    }
}
