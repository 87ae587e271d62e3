use std::{
    collections::{BTreeMap, HashMap},
    rc::Rc,
};

use crate::{
    ast::FunctionDef,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Number},
};

/// A single binding environment.
#[derive(Debug, Default, Clone)]
pub struct Scope {
    /// Variable bindings, kept in name order for the bare `print` dump.
    pub bindings:  BTreeMap<String, Number>,
    /// Function definitions, shared with the AST that declared them.
    pub functions: HashMap<String, Rc<FunctionDef>>,
}

/// The stack of live scopes.
///
/// The root scope is held apart from the nested ones, so it can never be
/// popped. The enclosing scope of `nested[i]` is `nested[i - 1]`, and of
/// `nested[0]` the root. Names resolve from the innermost scope outward.
#[derive(Debug, Clone)]
pub struct ScopeChain {
    root:   Scope,
    nested: Vec<Scope>,
}

impl Default for ScopeChain {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeChain {
    /// Creates a chain holding only an empty root scope.
    #[must_use]
    pub fn new() -> Self {
        Self { root:   Scope::default(),
               nested: Vec::new(), }
    }

    /// Pushes a fresh child scope.
    pub fn enter(&mut self) {
        self.nested.push(Scope::default());
    }

    /// Drops the current scope and returns to its parent.
    ///
    /// # Errors
    /// `ExitRootScope` when only the root scope is left.
    ///
    /// # Example
    /// ```
    /// use spl::{error::RuntimeError, interpreter::scope::ScopeChain};
    ///
    /// let mut scopes = ScopeChain::new();
    /// scopes.enter();
    /// assert_eq!(scopes.depth(), 2);
    ///
    /// assert!(scopes.exit().is_ok());
    /// assert_eq!(scopes.exit(), Err(RuntimeError::ExitRootScope));
    /// ```
    pub fn exit(&mut self) -> EvalResult<()> {
        self.nested.pop().map(|_| ()).ok_or(RuntimeError::ExitRootScope)
    }

    /// Number of live scopes, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.nested.len() + 1
    }

    fn current(&self) -> &Scope {
        self.nested.last().unwrap_or(&self.root)
    }

    fn current_mut(&mut self) -> &mut Scope {
        match self.nested.last_mut() {
            Some(scope) => scope,
            None => &mut self.root,
        }
    }

    /// Scopes from the innermost outward, ending with the root.
    fn innermost_first(&self) -> impl Iterator<Item = &Scope> {
        self.nested.iter().rev().chain(std::iter::once(&self.root))
    }

    /// Binds `name` in the current scope, shadowing any outer binding.
    ///
    /// # Example
    /// ```
    /// use spl::interpreter::{scope::ScopeChain, value::Number};
    ///
    /// let mut scopes = ScopeChain::new();
    /// scopes.assign("x", Number::Integer(1));
    /// scopes.enter();
    /// scopes.assign("x", Number::Integer(2));
    /// assert_eq!(scopes.lookup("x"), Some(&Number::Integer(2)));
    ///
    /// scopes.exit().unwrap();
    /// assert_eq!(scopes.lookup("x"), Some(&Number::Integer(1)));
    /// ```
    pub fn assign(&mut self, name: &str, value: Number) {
        self.current_mut().bindings.insert(name.to_string(), value);
    }

    /// Resolves a variable from the innermost scope outward.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Number> {
        self.innermost_first().find_map(|scope| scope.bindings.get(name))
    }

    /// Registers a function in the current scope, replacing any previous
    /// definition with the same name there.
    pub fn assign_function(&mut self, def: Rc<FunctionDef>) {
        self.current_mut().functions.insert(def.name.clone(), def);
    }

    /// Resolves a function from the innermost scope outward.
    #[must_use]
    pub fn lookup_function(&self, name: &str) -> Option<Rc<FunctionDef>> {
        self.innermost_first()
            .find_map(|scope| scope.functions.get(name))
            .cloned()
    }

    /// Iterates the current scope's bindings in name order.
    pub fn bindings(&self) -> impl Iterator<Item = (&String, &Number)> {
        self.current().bindings.iter()
    }

    /// Copies out the current scope's variable bindings.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, Number> {
        self.current().bindings.clone()
    }

    /// Replaces the current scope's variable bindings with `snapshot`.
    ///
    /// # Example
    /// ```
    /// use spl::interpreter::{scope::ScopeChain, value::Number};
    ///
    /// let mut scopes = ScopeChain::new();
    /// scopes.assign("a", Number::Integer(10));
    ///
    /// let saved = scopes.snapshot();
    /// scopes.assign("a", Number::Integer(1));
    /// scopes.assign("b", Number::Integer(2));
    /// scopes.restore(saved);
    ///
    /// assert_eq!(scopes.lookup("a"), Some(&Number::Integer(10)));
    /// assert_eq!(scopes.lookup("b"), None);
    /// ```
    pub fn restore(&mut self, snapshot: BTreeMap<String, Number>) {
        self.current_mut().bindings = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, FunctionBody};

    fn def(name: &str) -> Rc<FunctionDef> {
        Rc::new(FunctionDef { name:   name.to_string(),
                              params: vec![],
                              body:   FunctionBody::Expression(Expr::Literal { value: Number::Integer(1),
                                                                               line:  1, }),
                              line:   1, })
    }

    #[test]
    fn functions_resolve_outward_and_vanish_with_their_scope() {
        let mut scopes = ScopeChain::new();
        scopes.enter();
        scopes.assign_function(def("f"));
        scopes.enter();
        assert!(scopes.lookup_function("f").is_some());

        scopes.exit().unwrap();
        scopes.exit().unwrap();
        assert!(scopes.lookup_function("f").is_none());
    }

    #[test]
    fn bindings_only_lists_the_current_scope_sorted() {
        let mut scopes = ScopeChain::new();
        scopes.assign("outer", Number::Integer(0));
        scopes.enter();
        scopes.assign("b", Number::Integer(2));
        scopes.assign("a", Number::Float(1.5));

        let names: Vec<_> = scopes.bindings().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn exiting_the_root_leaves_it_current() {
        let mut scopes = ScopeChain::new();
        scopes.enter();
        scopes.exit().unwrap();

        assert_eq!(scopes.exit(), Err(RuntimeError::ExitRootScope));
        assert_eq!(scopes.depth(), 1);

        scopes.assign("x", Number::Integer(3));
        let names: Vec<_> = scopes.bindings().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["x"]);
    }
}
