//! The built-in factories, callable by name through a [`Registry`].
//!
//! Callbacks arrive as [`Arg::Func`](pipekit_pipeline::Arg::Func) and receive
//! their operands as a slice. Predicates are judged by the truthiness of what
//! the callback returns; comparators return a number whose sign orders the
//! pair.

use std::cmp::Ordering;

use log::debug;

use pipekit_pipeline::{Args, Callback, Registry, Transformer};
use pipekit_primitives::{Key, PipeError, Result, Value};

use crate::ops;

fn predicate(f: Callback) -> impl Fn(&Value) -> Result<bool> + Send + Sync + 'static {
    move |item| Ok(f(std::slice::from_ref(item))?.is_truthy())
}

fn comparator(f: Callback) -> impl Fn(&Value, &Value) -> Result<Ordering> + Send + Sync + 'static {
    move |a, b| {
        let sign = f(&[a.clone(), b.clone()])?.as_float()?;
        Ok(sign.partial_cmp(&0.0).unwrap_or(Ordering::Equal))
    }
}

/// Optional key argument; `null` or a missing argument means none.
fn key_arg(args: &Args, index: usize) -> Result<Option<Key>> {
    match args.value_or(index, Value::Null)? {
        Value::Null => Ok(None),
        other => Key::from_value(&other).map(Some).ok_or_else(|| {
            PipeError::invalid_argument(format!("argument #{} must be a scalar key", index + 1))
        }),
    }
}

fn int_arg(args: &Args, index: usize, default: i64) -> Result<i64> {
    args.value_or(index, Value::Int(default))?.as_int()
}

fn text_arg(args: &Args, index: usize) -> Result<String> {
    args.value(index)?.to_text()
}

fn separator_arg(args: &Args, index: usize) -> Result<String> {
    args.value_or(index, Value::from(""))?.to_text()
}

fn preserve_keys(args: &Args, index: usize) -> Result<bool> {
    Ok(args.value_or(index, Value::Null)?.is_truthy())
}

fn tap(args: Args) -> Result<Transformer> {
    let f = args.func(0)?;
    Ok(Transformer::named("tap", move |value| {
        f(std::slice::from_ref(&value))?;
        Ok(value)
    }))
}

fn map(args: Args) -> Result<Transformer> {
    let f = args.func(0)?;
    Ok(ops::map(move |item| f(&[item])))
}

fn filter(args: Args) -> Result<Transformer> {
    if args.is_empty() {
        return Ok(ops::filter(|item| Ok(item.is_truthy())));
    }
    Ok(ops::filter(predicate(args.func(0)?)))
}

fn filter_not(args: Args) -> Result<Transformer> {
    Ok(ops::filter_not(predicate(args.func(0)?)))
}

fn column(args: Args) -> Result<Transformer> {
    Ok(ops::column(key_arg(&args, 0)?, key_arg(&args, 1)?))
}

fn reduce(args: Args) -> Result<Transformer> {
    let f = args.func(0)?;
    let initial = args.value_or(1, Value::Null)?;
    Ok(ops::reduce(move |carry, item| f(&[carry, item]), initial))
}

fn flat(_: Args) -> Result<Transformer> {
    Ok(ops::flat())
}

fn values(_: Args) -> Result<Transformer> {
    Ok(ops::values())
}

fn merge(args: Args) -> Result<Transformer> {
    Ok(ops::merge(args.values().cloned().collect::<Vec<_>>()))
}

fn push(args: Args) -> Result<Transformer> {
    Ok(ops::push(args.values().cloned().collect::<Vec<_>>()))
}

fn take(args: Args) -> Result<Transformer> {
    let n = int_arg(&args, 0, 0)?;
    if preserve_keys(&args, 1)? {
        Ok(ops::take_preserve_keys(n))
    } else {
        Ok(ops::take(n))
    }
}

fn skip(args: Args) -> Result<Transformer> {
    let n = int_arg(&args, 0, 0)?;
    if preserve_keys(&args, 1)? {
        Ok(ops::skip_preserve_keys(n))
    } else {
        Ok(ops::skip(n))
    }
}

fn explode(args: Args) -> Result<Transformer> {
    let separator = text_arg(&args, 0)?;
    Ok(ops::explode_limit(separator, int_arg(&args, 1, i64::MAX)?))
}

fn implode(args: Args) -> Result<Transformer> {
    Ok(ops::implode(separator_arg(&args, 0)?))
}

fn join(args: Args) -> Result<Transformer> {
    Ok(ops::join(separator_arg(&args, 0)?))
}

fn sort(args: Args) -> Result<Transformer> {
    if args.is_empty() {
        return Ok(ops::sort());
    }
    Ok(ops::sort_by(comparator(args.func(0)?)))
}

fn all(args: Args) -> Result<Transformer> {
    Ok(ops::all(predicate(args.func(0)?)))
}

fn any(args: Args) -> Result<Transformer> {
    Ok(ops::any(predicate(args.func(0)?)))
}

fn some(args: Args) -> Result<Transformer> {
    Ok(ops::some(predicate(args.func(0)?)))
}

fn none(args: Args) -> Result<Transformer> {
    Ok(ops::none(predicate(args.func(0)?)))
}

type BuiltinFactory = fn(Args) -> Result<Transformer>;

const FACTORIES: &[(&str, BuiltinFactory)] = &[
    ("tap", tap),
    ("map", map),
    ("filter", filter),
    ("filterNot", filter_not),
    ("column", column),
    ("reduce", reduce),
    ("flat", flat),
    ("values", values),
    ("merge", merge),
    ("take", take),
    ("skip", skip),
    ("explode", explode),
    ("implode", implode),
    ("join", join),
    ("sort", sort),
    ("push", push),
    ("all", all),
    ("any", any),
    ("some", some),
    ("none", none),
];

/// Names installed by [`install`], in installation order.
pub fn names() -> impl ExactSizeIterator<Item = &'static str> {
    FACTORIES.iter().map(|(name, _)| *name)
}

/// Define every built-in factory in `registry` under its name.
pub fn install(registry: &Registry) -> Result<()> {
    for &(name, factory) in FACTORIES {
        registry.define(name, factory)?;
    }
    debug!("installed {} built-in methods", FACTORIES.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use anyhow::Result;
    use pipekit_pipeline::{Arg, args, pipe};
    use pipekit_primitives::array;
    use pipekit_primitives::test_utils::{ints, keyed, records, strs};

    use super::*;

    fn installed() -> Registry {
        let registry = Registry::new();
        install(&registry).unwrap();
        registry
    }

    fn int_fn<F>(f: F) -> Arg
    where
        F: Fn(i64) -> Value + Send + Sync + 'static,
    {
        Arg::func(move |xs| Ok(f(xs[0].as_int()?)))
    }

    #[test]
    fn test_names_are_unique() {
        let mut seen: Vec<&str> = names().collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), names().len());
    }

    #[test]
    fn test_install_defines_every_name() {
        let registry = installed();
        let mut expected: Vec<String> = names().map(String::from).collect();
        expected.sort();
        assert_eq!(registry.names(), expected);
    }

    #[test]
    fn test_map_filter_reduce_by_name() -> Result<()> {
        let r = installed();
        let out = pipe!(
            ints(&[1, 2, 3, 4]),
            r.call("map", args![int_fn(|n| Value::Int(n * 2))])?,
            r.call("filter", args![int_fn(|n| Value::Bool(n < 7))])?,
            r.call(
                "reduce",
                args![
                    Arg::func(|xs| Ok(Value::Int(xs[0].as_int()? + xs[1].as_int()?))),
                    0
                ]
            )?
        )?;
        assert_eq!(out, Value::Int(12));
        Ok(())
    }

    #[test]
    fn test_filter_without_callback_keeps_truthy() -> Result<()> {
        let r = installed();
        let out = pipe!(array![0, 1, "", "a", Value::Null], r.call("filter", args![])?)?;
        assert_eq!(out, array! {1 => 1, 3 => "a"});
        Ok(())
    }

    #[test]
    fn test_filter_not_by_name() -> Result<()> {
        let r = installed();
        let out = pipe!(ints(&[1, 2, 3]), r.call("filterNot", args![int_fn(|n| Value::Int(n - 2))])?)?;
        assert_eq!(out, keyed(&[(1, 2)]));
        Ok(())
    }

    #[test]
    fn test_tap_by_name_propagates_errors() -> Result<()> {
        let r = installed();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let record = Arg::func(move |xs| {
            sink.lock().unwrap().push(xs[0].clone());
            Ok(Value::Null)
        });
        assert_eq!(pipe!(7, r.call("tap", args![record])?)?, Value::Int(7));
        assert_eq!(*seen.lock().unwrap(), vec![Value::Int(7)]);

        let fail = Arg::func(|_| Err(PipeError::step("tap failed")));
        let err = pipe!(7, r.call("tap", args![fail])?).unwrap_err();
        assert!(matches!(err, PipeError::Step(_)));
        Ok(())
    }

    #[test]
    fn test_column_by_name() -> Result<()> {
        let r = installed();
        assert_eq!(pipe!(records(), r.call("column", args!["b"])?)?, ints(&[2, 4]));
        let out = pipe!(records(), r.call("column", args![Value::Null, "a"])?)?;
        assert_eq!(out.as_array()?.keys().cloned().collect::<Vec<_>>(), vec![
            Key::Int(1),
            Key::Int(3)
        ]);
        let err = r.call("column", args![ints(&[1])]).unwrap_err();
        assert!(err.is_invalid_argument());
        Ok(())
    }

    #[test]
    fn test_take_skip_by_name() -> Result<()> {
        let r = installed();
        assert_eq!(pipe!(ints(&[1, 2, 3]), r.call("take", args![2])?)?, ints(&[1, 2]));
        assert_eq!(pipe!(ints(&[1, 2, 3]), r.call("skip", args![-1])?)?, ints(&[1, 2]));
        assert_eq!(
            pipe!(ints(&[1, 2, 3]), r.call("skip", args![1, true])?)?,
            keyed(&[(1, 2), (2, 3)])
        );
        assert!(r.call("take", args!["two"]).is_err());
        Ok(())
    }

    #[test]
    fn test_shape_by_name() -> Result<()> {
        let r = installed();
        let out = pipe!(
            array![array![1, array![2]]],
            r.call("flat", args![])?,
            r.call("merge", args![ints(&[3]), 4])?,
            r.call("push", args![ints(&[5])])?
        )?;
        assert_eq!(out, array![1, 2, 3, 4, array![5]]);
        assert_eq!(pipe!(keyed(&[(4, 1)]), r.call("values", args![])?)?, ints(&[1]));
        Ok(())
    }

    #[test]
    fn test_text_by_name() -> Result<()> {
        let r = installed();
        assert_eq!(pipe!("a-b-c", r.call("explode", args!["-", 2])?)?, strs(&["a", "b-c"]));
        assert_eq!(pipe!(strs(&["a", "b"]), r.call("implode", args!["+"])?)?, Value::from("a+b"));
        assert_eq!(pipe!(ints(&[1, 2]), r.call("join", args![", "])?)?, Value::from("1, 2"));
        assert!(r.call("explode", args![]).unwrap_err().is_invalid_argument());
        Ok(())
    }

    #[test]
    fn test_implode_and_join_default_to_no_separator() -> Result<()> {
        let r = installed();
        assert_eq!(pipe!(strs(&["a", "b"]), r.call("implode", args![])?)?, Value::from("ab"));
        assert_eq!(pipe!(ints(&[1, 2, 3]), r.call("join", args![])?)?, Value::from("123"));
        Ok(())
    }

    #[test]
    fn test_reduce_by_name_without_seed() -> Result<()> {
        let r = installed();
        let sum = || Arg::func(|xs| Ok(Value::Int(xs[0].as_int()? + xs[1].as_int()?)));
        assert_eq!(pipe!(ints(&[]), r.call("reduce", args![sum()])?)?, Value::Null);
        assert_eq!(pipe!(ints(&[]), r.call("reduce", args![sum(), 5])?)?, Value::Int(5));
        Ok(())
    }

    #[test]
    fn test_sort_by_name() -> Result<()> {
        let r = installed();
        assert_eq!(pipe!(ints(&[3, 2, 1]), r.call("sort", args![])?)?, ints(&[1, 2, 3]));
        let flipped = Arg::func(|xs| Ok(Value::Int(xs[1].as_int()? - xs[0].as_int()?)));
        assert_eq!(pipe!(ints(&[-2, 0, 3]), r.call("sort", args![flipped])?)?, ints(&[3, 0, -2]));
        Ok(())
    }

    #[test]
    fn test_predicates_by_name() -> Result<()> {
        let r = installed();
        let at_least_36 = || int_fn(|n| Value::Bool(n >= 36));
        let data = ints(&[6, 24, 36, 48]);
        assert_eq!(pipe!(data.clone(), r.call("all", args![at_least_36()])?)?, Value::Bool(false));
        assert_eq!(pipe!(data.clone(), r.call("any", args![at_least_36()])?)?, Value::Bool(true));
        assert_eq!(pipe!(data.clone(), r.call("some", args![at_least_36()])?)?, Value::Bool(true));
        assert_eq!(pipe!(data, r.call("none", args![at_least_36()])?)?, Value::Bool(false));
        Ok(())
    }

    #[test]
    fn test_missing_callback_is_invalid_argument() {
        let r = installed();
        for name in ["tap", "map", "filterNot", "reduce", "all", "any", "some", "none"] {
            let err = r.call(name, args![]).unwrap_err();
            assert!(err.is_invalid_argument(), "{} without a callback", name);
        }
        assert!(r.call("map", args![1]).unwrap_err().is_invalid_argument());
    }
}
