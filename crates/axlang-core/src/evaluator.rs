//! The recursive evaluator (§4.1).
//!
//! One public operation, [`eval`], dispatching in the order laid out
//! in the spec's dispatch table: numeric/string self-evaluation,
//! variable and operator references, then the eighteen special forms,
//! falling through to ordinary function application.

use crate::ast::{is_identifier, Ast};
use crate::builtins::OPERATOR_NAMES;
use crate::desugar;
use crate::environment::Env;
use crate::error::AxError;
use crate::modules::{self, SourceParser};
use crate::value::Value;
use std::path::Path;

/// Everything `eval` needs beyond the expression and environment: a
/// parser to hand `import` (the core has none of its own, §1) and the
/// root under which `modules/<name>.ax` is resolved (§4.5).
pub struct EvalContext<'a> {
    pub parser: &'a dyn SourceParser,
    pub modules_root: &'a Path,
}

pub fn eval(expr: &Ast, env: &Env, ctx: &EvalContext) -> Result<Value, AxError> {
    match expr {
        Ast::Integer(n) => Ok(Value::Integer(*n)),
        Ast::Float(n) => Ok(Value::Float(*n)),

        _ if expr.is_string_literal_shape() => Ok(Value::String(expr.strip_quotes().to_string())),

        Ast::StringLiteral(s) => Ok(Value::String(s.clone())),

        Ast::Symbol(name) if is_identifier(name) => env.lookup(name),

        Ast::Symbol(name) if OPERATOR_NAMES.contains(&name.as_str()) => env.lookup(name),

        Ast::Symbol(name) => Err(AxError::TypeError(format!("not a valid reference: {name}"))),

        Ast::List(items) => eval_list(items, env, ctx),
    }
}

fn eval_list(items: &[Ast], env: &Env, ctx: &EvalContext) -> Result<Value, AxError> {
    if items.is_empty() {
        return Ok(Value::Null);
    }

    if let Some(head) = items[0].as_symbol() {
        let rest = &items[1..];
        match head {
            "var" => return eval_var(rest, env, ctx),
            "set" => return eval_set(rest, env, ctx),
            "begin" => return eval_begin(rest, env, ctx),
            "if" => return eval_if(rest, env, ctx),
            "while" => return eval_while(rest, env, ctx),
            "lambda" => return eval_lambda(rest, env),
            "def" => {
                let (name, params, body) = arity3(rest, "def")?;
                return eval(&desugar::def_to_lambda(name.clone(), params.clone(), body.clone()), env, ctx);
            }
            "switch" => return eval(&desugar::switch_to_if(rest), env, ctx),
            "for" => {
                let (init, cond, step, body) = arity4(rest, "for")?;
                return eval(
                    &desugar::for_to_while(init.clone(), cond.clone(), step.clone(), body.clone()),
                    env,
                    ctx,
                );
            }
            "++" | "--" => {
                let var = arity1(rest, head)?;
                return eval(&desugar::inc_dec_to_set(head, var.clone()), env, ctx);
            }
            "+=" | "-=" | "*=" | "/=" => {
                let (var, val) = arity2(rest, head)?;
                return eval(&desugar::compound_assign_to_set(head, var.clone(), val.clone()), env, ctx);
            }
            "class" => return eval_class(rest, env, ctx),
            "super" => return eval_super(rest, env),
            "new" => return eval_new(rest, env, ctx),
            "prop" => return eval_prop(rest, env, ctx),
            "module" => return eval_module(rest, env, ctx),
            "import" => return eval_import(rest, env, ctx),
            _ => {}
        }
    }

    eval_call(items, env, ctx)
}

fn eval_var(args: &[Ast], env: &Env, ctx: &EvalContext) -> Result<Value, AxError> {
    let (name, expr) = arity2(args, "var")?;
    let name = name
        .as_symbol()
        .ok_or_else(|| AxError::TypeError("var requires a symbol name".to_string()))?;
    let value = eval(expr, env, ctx)?;
    Ok(env.define(name, value))
}

fn eval_set(args: &[Ast], env: &Env, ctx: &EvalContext) -> Result<Value, AxError> {
    let (target, expr) = arity2(args, "set")?;
    let value = eval(expr, env, ctx)?;

    if let Some(prop_items) = target.as_list() {
        if prop_items.first().and_then(Ast::as_symbol) == Some("prop") {
            let (inst_expr, name_expr) = arity2(&prop_items[1..], "prop")?;
            let name = name_expr
                .as_symbol()
                .ok_or_else(|| AxError::TypeError("prop requires a symbol member name".to_string()))?;
            let instance = eval(inst_expr, env, ctx)?;
            let handle = instance
                .as_env_handle()
                .ok_or_else(|| AxError::TypeError("prop target must be an environment".to_string()))?;
            // Property creation and mutation share `define`, not `assign` (§4.1, intentional asymmetry, §9).
            handle.define(name, value.clone());
            return Ok(value);
        }
    }

    let name = target
        .as_symbol()
        .ok_or_else(|| AxError::TypeError("set requires a symbol or (prop ...) target".to_string()))?;
    env.assign(name, value.clone())?;
    Ok(value)
}

fn eval_begin(exprs: &[Ast], env: &Env, ctx: &EvalContext) -> Result<Value, AxError> {
    let child = Env::child_of(env);
    eval_sequence_in(exprs, &child, ctx)
}

/// Shared by `begin` and function application: evaluate each
/// expression in order in `env`, returning the last value (or `Null`
/// if empty).
fn eval_sequence_in(exprs: &[Ast], env: &Env, ctx: &EvalContext) -> Result<Value, AxError> {
    let mut result = Value::Null;
    for expr in exprs {
        result = eval(expr, env, ctx)?;
    }
    Ok(result)
}

fn eval_if(args: &[Ast], env: &Env, ctx: &EvalContext) -> Result<Value, AxError> {
    if args.len() != 3 {
        return Err(AxError::TypeError(format!(
            "if requires (cond then else), got {} arguments",
            args.len()
        )));
    }
    let test = eval(&args[0], env, ctx)?;
    if test.is_truthy() {
        eval(&args[1], env, ctx)
    } else {
        eval(&args[2], env, ctx)
    }
}

fn eval_while(args: &[Ast], env: &Env, ctx: &EvalContext) -> Result<Value, AxError> {
    let (cond, body) = arity2(args, "while")?;
    let mut result = Value::Null;
    while eval(cond, env, ctx)?.is_truthy() {
        result = eval(body, env, ctx)?;
    }
    Ok(result)
}

fn eval_lambda(args: &[Ast], env: &Env) -> Result<Value, AxError> {
    let (params_expr, body) = arity2(args, "lambda")?;
    let params = params_expr
        .as_list()
        .ok_or_else(|| AxError::TypeError("lambda requires a parameter list".to_string()))?
        .iter()
        .map(|p| {
            p.as_symbol()
                .map(str::to_string)
                .ok_or_else(|| AxError::TypeError("lambda parameters must be symbols".to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Lambda {
        params,
        body: Box::new(body.clone()),
        captured_env: env.clone(),
    })
}

fn eval_class(args: &[Ast], env: &Env, ctx: &EvalContext) -> Result<Value, AxError> {
    let (name_expr, parent_expr, body) = arity3(args, "class")?;
    let name = name_expr
        .as_symbol()
        .ok_or_else(|| AxError::TypeError("class requires a symbol name".to_string()))?;

    let parent_value = eval(parent_expr, env, ctx)?;
    let parent_env = match parent_value {
        Value::Null => env.clone(),
        Value::EnvHandle(e) => e,
        other => {
            return Err(AxError::TypeError(format!(
                "class parent must be null or an environment, got {other}"
            )))
        }
    };

    let class_env = Env::child_of(&parent_env);
    eval(body, &class_env, ctx)?;
    env.define(name, Value::EnvHandle(class_env.clone()));
    Ok(Value::EnvHandle(class_env))
}

fn eval_super(args: &[Ast], env: &Env) -> Result<Value, AxError> {
    let class_name_expr = arity1(args, "super")?;
    let class_name = class_name_expr
        .as_symbol()
        .ok_or_else(|| AxError::TypeError("super requires a class name symbol".to_string()))?;
    let class_value = env.lookup(class_name)?;
    let class_env = class_value
        .as_env_handle()
        .ok_or_else(|| AxError::TypeError(format!("{class_name} is not a class")))?;
    match class_env.parent() {
        Some(parent) => Ok(Value::EnvHandle(parent)),
        None => Ok(Value::Null),
    }
}

fn eval_new(args: &[Ast], env: &Env, ctx: &EvalContext) -> Result<Value, AxError> {
    let (class_expr, ctor_args) = args
        .split_first()
        .ok_or_else(|| AxError::TypeError("new requires a class expression".to_string()))?;

    let class_value = eval(class_expr, env, ctx)?;
    let class_env = class_value
        .as_env_handle()
        .ok_or_else(|| AxError::TypeError("new requires a class environment".to_string()))?
        .clone();

    let instance_env = Env::child_of(&class_env);

    let args = ctor_args
        .iter()
        .map(|a| eval(a, env, ctx))
        .collect::<Result<Vec<_>, _>>()?;

    let constructor = class_env.lookup("constructor")?;
    let mut call_args = Vec::with_capacity(args.len() + 1);
    call_args.push(Value::EnvHandle(instance_env.clone()));
    call_args.extend(args);
    apply(constructor, &call_args, ctx)?;

    Ok(Value::EnvHandle(instance_env))
}

fn eval_prop(args: &[Ast], env: &Env, ctx: &EvalContext) -> Result<Value, AxError> {
    let (expr, name_expr) = arity2(args, "prop")?;
    let name = name_expr
        .as_symbol()
        .ok_or_else(|| AxError::TypeError("prop requires a symbol member name".to_string()))?;
    let value = eval(expr, env, ctx)?;
    let handle = value
        .as_env_handle()
        .ok_or_else(|| AxError::TypeError("prop target must be an environment".to_string()))?;
    handle.lookup(name)
}

fn eval_module(args: &[Ast], env: &Env, ctx: &EvalContext) -> Result<Value, AxError> {
    let (name_expr, body) = arity2(args, "module")?;
    let name = name_expr
        .as_symbol()
        .ok_or_else(|| AxError::TypeError("module requires a symbol name".to_string()))?;
    let module_env = Env::child_of(env);
    eval(body, &module_env, ctx)?;
    env.define(name, Value::EnvHandle(module_env.clone()));
    Ok(Value::EnvHandle(module_env))
}

fn eval_import(args: &[Ast], env: &Env, ctx: &EvalContext) -> Result<Value, AxError> {
    let name_expr = arity1(args, "import")?;
    let name = name_expr
        .as_symbol()
        .ok_or_else(|| AxError::TypeError("import requires a symbol module name".to_string()))?;

    let source = modules::load_module_source(ctx.modules_root, name)?;
    let parsed_body = modules::parse_module_body(ctx.parser, &source)?;

    eval_module(&[name_expr.clone(), parsed_body], env, ctx)
}

fn eval_call(items: &[Ast], env: &Env, ctx: &EvalContext) -> Result<Value, AxError> {
    let callee = eval(&items[0], env, ctx)?;
    let args = items[1..]
        .iter()
        .map(|a| eval(a, env, ctx))
        .collect::<Result<Vec<_>, _>>()?;
    apply(callee, &args, ctx)
}

fn apply(callee: Value, args: &[Value], ctx: &EvalContext) -> Result<Value, AxError> {
    match callee {
        Value::Native(f) => f(args),
        Value::Lambda {
            params,
            body,
            captured_env,
        } => {
            let activation = Env::child_of(&captured_env);
            for (param, arg) in params.iter().zip(args.iter()) {
                activation.define(param, arg.clone());
            }
            // A `begin`-headed body runs directly in the activation
            // environment rather than nesting another scope (§4.1 rule 6).
            if let Some(items) = body.as_list() {
                if items.first().and_then(Ast::as_symbol) == Some("begin") {
                    return eval_sequence_in(&items[1..], &activation, ctx);
                }
            }
            eval(&body, &activation, ctx)
        }
        other => Err(AxError::TypeError(format!("cannot call non-function: {other}"))),
    }
}

fn arity1(args: &[Ast], form: &str) -> Result<&Ast, AxError> {
    match args {
        [a] => Ok(a),
        _ => Err(AxError::TypeError(format!(
            "{form} requires 1 argument, got {}",
            args.len()
        ))),
    }
}

fn arity2(args: &[Ast], form: &str) -> Result<(&Ast, &Ast), AxError> {
    match args {
        [a, b] => Ok((a, b)),
        _ => Err(AxError::TypeError(format!(
            "{form} requires 2 arguments, got {}",
            args.len()
        ))),
    }
}

fn arity3(args: &[Ast], form: &str) -> Result<(&Ast, &Ast, &Ast), AxError> {
    match args {
        [a, b, c] => Ok((a, b, c)),
        _ => Err(AxError::TypeError(format!(
            "{form} requires 3 arguments, got {}",
            args.len()
        ))),
    }
}

fn arity4(args: &[Ast], form: &str) -> Result<(&Ast, &Ast, &Ast, &Ast), AxError> {
    match args {
        [a, b, c, d] => Ok((a, b, c, d)),
        _ => Err(AxError::TypeError(format!(
            "{form} requires 4 arguments, got {}",
            args.len()
        ))),
    }
}
