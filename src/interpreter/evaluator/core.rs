use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDef, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::body::BodyContext,
        value::core::{FunctionValue, LoopSignal, RuntimeValue},
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Deepest nesting of user function calls before evaluation is aborted.
pub const MAX_CALL_DEPTH: usize = 10_000;

/// Stores the runtime evaluation context.
///
/// Bindings live in the [`Environment`](crate::interpreter::environment::Environment)
/// chain passed to every method; the context only tracks state belonging to
/// the evaluation itself.
///
/// ## Usage
///
/// A `Context` is created once per interpreter and reused across programs.
/// ```
/// use laika::interpreter::{
///     environment::Environment, evaluator::core::Context, parser::core::parse_program,
///     value::core::RuntimeValue,
/// };
///
/// let env = Environment::global();
/// let mut ctx = Context::new();
///
/// let program = parse_program("mut x = 2; x * 21").unwrap();
/// let result = ctx.eval_program(&program, &env).unwrap();
/// assert_eq!(result, RuntimeValue::Number(42.0));
/// ```
#[derive(Debug, Default)]
pub struct Context {
    /// Number of user function calls currently executing.
    pub(crate) call_depth: usize,
}

impl Context {
    /// Creates a new evaluation context with no active calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a whole program in `env`.
    ///
    /// The statements run as a top-level body. A `return` at the top level
    /// is handed back still wrapped in [`RuntimeValue::Return`], so the
    /// caller can turn it into an exit status.
    ///
    /// # Returns
    /// The value of the last statement, Null for an empty program, or the
    /// `Return` signal of a top-level `return`.
    pub fn eval_program(&mut self, program: &Program, env: &Env) -> EvalResult<RuntimeValue> {
        self.execute_body(&program.body, env, BodyContext::Main)
    }

    /// Evaluates a single statement.
    ///
    /// Declarations add bindings to `env`; control constructs run their
    /// bodies; `break`, `pass` and `return` produce the signals that
    /// [`Context::execute_body`] routes.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `env`: Scope the statement runs in.
    ///
    /// # Returns
    /// The statement's value, or a control-flow signal.
    pub fn eval_statement(&mut self, statement: &Statement, env: &Env) -> EvalResult<RuntimeValue> {
        ensure_sufficient_stack(|| self.eval_statement_inner(statement, env))
    }

    fn eval_statement_inner(&mut self, statement: &Statement, env: &Env) -> EvalResult<RuntimeValue> {
        match statement {
            Statement::VariableDeclaration { constant, name, value } => {
                let value = match value {
                    Some(expr) => self.eval(expr, env)?,
                    None => RuntimeValue::Null,
                };
                env.declare(name, value, *constant)
            },
            Statement::Function(def) => Self::eval_function_declaration(def, env),
            Statement::If { condition,
                            then_branch,
                            else_branch, } => self.eval_if(condition, then_branch, else_branch, env),
            Statement::While { condition, body } => self.eval_while(condition, body, env),
            Statement::For(for_loop) => self.eval_for(for_loop, env),
            Statement::Break => Ok(RuntimeValue::Break(LoopSignal::Break)),
            Statement::Pass => Ok(RuntimeValue::Break(LoopSignal::Pass)),
            Statement::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval(expr, env)?,
                    None => RuntimeValue::Null,
                };
                Ok(RuntimeValue::Return(Box::new(value)))
            },
            Statement::Expression(expr) => self.eval(expr, env),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant. The host stack is grown on
    /// demand before descending, so nesting depth is limited by
    /// [`MAX_CALL_DEPTH`] rather than by the native stack.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Scope used to resolve names.
    ///
    /// # Returns
    /// The value of the expression.
    pub fn eval(&mut self, expr: &Expr, env: &Env) -> EvalResult<RuntimeValue> {
        ensure_sufficient_stack(|| self.eval_expr(expr, env))
    }

    fn eval_expr(&mut self, expr: &Expr, env: &Env) -> EvalResult<RuntimeValue> {
        match expr {
            Expr::NumericLiteral(value) => Ok(RuntimeValue::Number(*value)),
            Expr::StringLiteral(value) => Ok(RuntimeValue::String(value.clone())),
            Expr::Identifier(name) => env.lookup(name),
            Expr::ObjectLiteral(properties) => self.eval_object_literal(properties, env),
            Expr::Binary { left, op, right } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Self::eval_binary(*op, &left, &right)
            },
            Expr::Logical { left, op, right } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Self::eval_logical(*op, &left, &right)
            },
            Expr::Unary { op, operand } => self.eval_unary(*op, operand, env),
            Expr::Assignment { assignee, value } => self.eval_assignment(assignee, value, env),
            Expr::Member { object,
                           property,
                           computed, } => self.eval_member(object, property, *computed, env),
            Expr::Call { caller, arguments } => self.eval_call(caller, arguments, env),
        }
    }

    /// Binds a function declaration in `env` as a constant.
    ///
    /// The function captures `env` as its closure, so its free names resolve
    /// in the scope the declaration ran in.
    fn eval_function_declaration(def: &Rc<FunctionDef>, env: &Env) -> EvalResult<RuntimeValue> {
        let function = FunctionValue { definition: Rc::clone(def),
                                       closure:    Rc::clone(env), };

        env.declare(&def.name, RuntimeValue::Function(Rc::new(function)), true)
    }
}
