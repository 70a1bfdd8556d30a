use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Expr, Property, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::{
            body::BodyContext,
            core::{Context, EvalResult},
        },
        value::{core::RuntimeValue, object::Properties},
    },
    util::num::number_key,
};

impl Context {
    /// Evaluates an assignment.
    ///
    /// Only identifiers are assignable. The value is evaluated and stored in
    /// the nearest scope owning the name.
    ///
    /// # Returns
    /// The assigned value.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` if the assignee is not an identifier.
    /// - `UnresolvedName` / `ConstantReassignment` from the environment.
    ///
    /// # Example
    /// ```
    /// use laika::{error::{Error, RuntimeError}, run_source};
    ///
    /// let err = run_source("keep PI = 3; PI = 4;").unwrap_err();
    /// assert!(matches!(err, Error::Runtime(RuntimeError::ConstantReassignment { .. })));
    /// ```
    pub fn eval_assignment(&mut self,
                           assignee: &Expr,
                           value: &Expr,
                           env: &Env)
                           -> EvalResult<RuntimeValue> {
        let Expr::Identifier(name) = assignee else {
            return Err(RuntimeError::InvalidAssignmentTarget { kind: assignee.kind() });
        };

        let value = self.eval(value, env)?;
        env.assign(name, value)
    }

    /// Builds an object from its literal.
    ///
    /// Properties are evaluated in order. A shorthand property looks up the
    /// binding with the same name now, at evaluation time. A repeated key
    /// keeps its first position and its last value.
    pub fn eval_object_literal(&mut self,
                               properties: &[Property],
                               env: &Env)
                               -> EvalResult<RuntimeValue> {
        let object = properties.iter()
                               .map(|Property { key, value }| -> EvalResult<(String, RuntimeValue)> {
                                   let value = match value {
                                       Some(expr) => self.eval(expr, env)?,
                                       None => env.lookup(key)?,
                                   };
                                   Ok((key.clone(), value))
                               })
                               .collect::<EvalResult<Properties>>()?;

        Ok(RuntimeValue::object(object))
    }

    /// Evaluates a member access, `object.key` or `object[expr]`.
    ///
    /// # Returns
    /// The property value, or Null when the object has no such key.
    pub fn eval_member(&mut self,
                       object: &Expr,
                       property: &Expr,
                       computed: bool,
                       env: &Env)
                       -> EvalResult<RuntimeValue> {
        let (target, key) = self.member_target(object, property, computed, env)?;
        let value = target.borrow()
                          .get(&key)
                          .cloned()
                          .unwrap_or(RuntimeValue::Null);
        Ok(value)
    }

    /// Resolves the object and key a member expression refers to.
    ///
    /// A dotted property names its key directly. A computed property is
    /// evaluated and must be a String, or a Number, which is converted to its
    /// display form.
    ///
    /// # Errors
    /// `TypeError` if the object is not an Object or the computed key has
    /// another type.
    pub(crate) fn member_target(&mut self,
                                object: &Expr,
                                property: &Expr,
                                computed: bool,
                                env: &Env)
                                -> EvalResult<(Rc<RefCell<Properties>>, String)> {
        let target = match self.eval(object, env)? {
            RuntimeValue::Object(properties) => properties,
            other => {
                return Err(RuntimeError::TypeError { details: format!("cannot access a property \
                                                                       of {}",
                                                                      other.type_name()) });
            },
        };

        let key = match (computed, property) {
            (false, Expr::Identifier(name)) => name.clone(),
            _ => match self.eval(property, env)? {
                RuntimeValue::String(s) => s,
                RuntimeValue::Number(n) => number_key(n),
                other => {
                    return Err(RuntimeError::TypeError { details: format!("property key must be \
                                                                           a string or number, \
                                                                           found {}",
                                                                          other.type_name()) });
                },
            },
        };

        Ok((target, key))
    }

    /// Evaluates an `if` statement.
    ///
    /// Exactly one branch runs, chosen by the truthiness of the condition.
    /// The branch runs in the enclosing scope, so declarations inside it
    /// remain visible afterwards. Control-flow signals raised in the branch
    /// are handed to the enclosing body.
    ///
    /// # Returns
    /// The value of the branch that ran, Null when there is no `else`
    /// branch to run, or a control-flow signal.
    pub fn eval_if(&mut self,
                   condition: &Expr,
                   then_branch: &[Statement],
                   else_branch: &[Statement],
                   env: &Env)
                   -> EvalResult<RuntimeValue> {
        let branch = if self.eval(condition, env)?.is_truthy()? {
            then_branch
        } else {
            else_branch
        };

        self.execute_body(branch, env, BodyContext::IfElse)
    }
}
