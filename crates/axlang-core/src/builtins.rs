//! Built-in natives and the global environment (§4.4).
//!
//! Grounded in the original implementation's `NativeFunctions` and
//! `global_env()`: arithmetic, comparison, and `print`, plus the
//! `null`/`true`/`false`/`VERSION` constants.

use crate::environment::Env;
use crate::error::AxError;
use crate::value::Value;

/// Names the evaluator treats as built-in operator references even
/// when they don't match the identifier regex (§4.1 rule 4).
pub const OPERATOR_NAMES: &[&str] = &["+", "-", "*", "/", ">", ">=", "<", "<=", "==", "print"];

/// `VERSION` is always defined in this implementation — see §9's
/// resolved open question.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn create_global_env() -> Env {
    let env = Env::new_global();

    env.define("null", Value::Null);
    env.define("true", Value::Boolean(true));
    env.define("false", Value::Boolean(false));
    env.define("VERSION", Value::String(VERSION.to_string()));

    env.define("+", Value::Native(native_add));
    env.define("-", Value::Native(native_sub));
    env.define("*", Value::Native(native_mul));
    env.define("/", Value::Native(native_div));

    env.define(">", Value::Native(native_gt));
    env.define(">=", Value::Native(native_ge));
    env.define("<", Value::Native(native_lt));
    env.define("<=", Value::Native(native_le));
    env.define("==", Value::Native(native_eq));

    env.define("print", Value::Native(native_print));

    env
}

#[derive(Clone, Copy)]
enum Num {
    Int(i64),
    Float(f64),
}

fn as_num(v: &Value) -> Result<Num, AxError> {
    match v {
        Value::Integer(n) => Ok(Num::Int(*n)),
        Value::Float(n) => Ok(Num::Float(*n)),
        other => Err(AxError::TypeError(format!("expected a number, got {other}"))),
    }
}

fn num_to_value(n: Num) -> Value {
    match n {
        Num::Int(n) => Value::Integer(n),
        Num::Float(n) => Value::Float(n),
    }
}

fn binary_numeric(
    args: &[Value],
    int_op: impl Fn(i64, i64) -> Result<i64, AxError>,
    float_op: impl Fn(f64, f64) -> f64,
) -> Result<Value, AxError> {
    if args.len() != 2 {
        return Err(AxError::TypeError(format!(
            "expected 2 arguments, got {}",
            args.len()
        )));
    }
    match (as_num(&args[0])?, as_num(&args[1])?) {
        (Num::Int(a), Num::Int(b)) => Ok(Value::Integer(int_op(a, b)?)),
        (a, b) => {
            let (a, b) = (to_f64(a), to_f64(b));
            Ok(Value::Float(float_op(a, b)))
        }
    }
}

fn to_f64(n: Num) -> f64 {
    match n {
        Num::Int(n) => n as f64,
        Num::Float(n) => n,
    }
}

fn native_add(args: &[Value]) -> Result<Value, AxError> {
    binary_numeric(args, |a, b| Ok(a.wrapping_add(b)), |a, b| a + b)
}

/// `-` is unary (negate) or binary (subtract), per §4.4.
fn native_sub(args: &[Value]) -> Result<Value, AxError> {
    match args.len() {
        1 => Ok(num_to_value(match as_num(&args[0])? {
            Num::Int(n) => Num::Int(-n),
            Num::Float(n) => Num::Float(-n),
        })),
        2 => binary_numeric(args, |a, b| Ok(a.wrapping_sub(b)), |a, b| a - b),
        n => Err(AxError::TypeError(format!(
            "`-` expects 1 or 2 arguments, got {n}"
        ))),
    }
}

fn native_mul(args: &[Value]) -> Result<Value, AxError> {
    binary_numeric(args, |a, b| Ok(a.wrapping_mul(b)), |a, b| a * b)
}

fn native_div(args: &[Value]) -> Result<Value, AxError> {
    binary_numeric(
        args,
        |a, b| {
            if b == 0 {
                Err(AxError::Arithmetic("division by zero".to_string()))
            } else {
                Ok(a / b)
            }
        },
        |a, b| a / b,
    )
}

fn comparison(
    args: &[Value],
    cmp: impl Fn(std::cmp::Ordering) -> bool,
) -> Result<Value, AxError> {
    if args.len() != 2 {
        return Err(AxError::TypeError(format!(
            "expected 2 arguments, got {}",
            args.len()
        )));
    }
    let (a, b) = (to_f64(as_num(&args[0])?), to_f64(as_num(&args[1])?));
    let ordering = a
        .partial_cmp(&b)
        .ok_or_else(|| AxError::TypeError("cannot compare NaN".to_string()))?;
    Ok(Value::Boolean(cmp(ordering)))
}

fn native_gt(args: &[Value]) -> Result<Value, AxError> {
    comparison(args, |o| o == std::cmp::Ordering::Greater)
}
fn native_ge(args: &[Value]) -> Result<Value, AxError> {
    comparison(args, |o| o != std::cmp::Ordering::Less)
}
fn native_lt(args: &[Value]) -> Result<Value, AxError> {
    comparison(args, |o| o == std::cmp::Ordering::Less)
}
fn native_le(args: &[Value]) -> Result<Value, AxError> {
    comparison(args, |o| o != std::cmp::Ordering::Greater)
}

/// Numeric operands compare by value across `Integer`/`Float`, matching
/// `>`/`>=`/`<`/`<=`'s normalization — `(== 1 1.0)` is `true`. Anything
/// else falls back to `Value`'s own equality.
fn native_eq(args: &[Value]) -> Result<Value, AxError> {
    if args.len() != 2 {
        return Err(AxError::TypeError(format!(
            "expected 2 arguments, got {}",
            args.len()
        )));
    }
    let eq = match (as_num(&args[0]), as_num(&args[1])) {
        (Ok(a), Ok(b)) => to_f64(a) == to_f64(b),
        _ => args[0] == args[1],
    };
    Ok(Value::Boolean(eq))
}

fn native_print(args: &[Value]) -> Result<Value, AxError> {
    let rendered: Vec<String> = args.iter().map(|v| v.to_string()).collect();
    println!("{}", rendered.join(" "));
    Ok(Value::Null)
}
