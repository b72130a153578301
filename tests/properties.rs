//! Property-based tests for the core combinators
//!
//! Every property is stated over plain literal parsers, whose behavior is
//! easy to compute independently with `str` methods.

use parsewise::any;
use parsewise::prelude::*;
use proptest::prelude::*;

/// Short strings over a tiny alphabet, so that prefixes collide often
fn text_strategy() -> impl Strategy<Value = String> {
    "[ab]{0,6}"
}

/// Non-empty literals over the same alphabet
fn literal_strategy() -> impl Strategy<Value = String> {
    "[ab]{1,3}"
}

/// Number of times `s` repeats at the start of `input`
fn repetitions(s: &str, mut input: &str) -> usize {
    let mut count = 0;
    while let Some(rest) = input.strip_prefix(s) {
        count += 1;
        input = rest;
    }
    count
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_literal_matches_prefix(s in "[ab]{0,3}", input in text_strategy()) {
            let result = parse(s.clone()).run(&input);
            prop_assert_eq!(result.is_ok(), input.starts_with(&s));
            if result.is_ok() {
                prop_assert_eq!(result.rest(), &input[s.len()..]);
            } else {
                prop_assert_eq!(result.rest(), input.as_str());
            }
        }

        #[test]
        fn test_seq_chains_rest(a in literal_strategy(), b in literal_strategy(), input in text_strategy()) {
            let first = parse(a.clone()).run(&input);
            let expected = first.is_ok() && parse(b.clone()).run(first.rest()).is_ok();

            let result = seq([a.clone(), b.clone()]).run(&input);
            prop_assert_eq!(result.is_ok(), expected);
            if expected {
                prop_assert_eq!(result.into_value(), Some(vec![a, b]));
            } else {
                prop_assert_eq!(result.rest(), input.as_str());
            }
        }

        #[test]
        fn test_or_is_first_success(a in literal_strategy(), b in literal_strategy(), input in text_strategy()) {
            let result = or([a.clone(), b.clone()]).run(&input);
            let first = parse(a).run(&input);
            let second = parse(b).run(&input);

            if first.is_ok() {
                prop_assert_eq!(result, first);
            } else if second.is_ok() {
                prop_assert_eq!(result, second);
            } else {
                prop_assert!(!result.is_ok());
                prop_assert_eq!(result.rest(), input.as_str());
            }
        }

        #[test]
        fn test_many_is_maximal(s in literal_strategy(), input in text_strategy()) {
            let parser = many(s.clone());
            let result = parser.run(&input);
            prop_assert!(result.is_ok());

            let rest = result.rest();
            let count = result.value().map(Vec::len);
            prop_assert_eq!(count, Some(repetitions(&s, &input)));

            let again = parser.run(rest);
            prop_assert_eq!(again.into_value(), Some(vec![]));
        }

        #[test]
        fn test_opt_never_fails(s in literal_strategy(), input in text_strategy()) {
            let result = opt(s.clone()).run(&input);
            prop_assert!(result.is_ok());

            let inner = parse(s).run(&input);
            if inner.is_ok() {
                prop_assert_eq!(result.rest(), inner.rest());
                prop_assert_eq!(result.into_value(), Some(inner.into_value()));
            } else {
                prop_assert_eq!(result.rest(), input.as_str());
                prop_assert_eq!(result.into_value(), Some(None));
            }
        }

        #[test]
        fn test_list_round_trip(values in prop::collection::vec(0i64..100_000, 0..8)) {
            let joined = values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(";");

            let result = list(integer(), ";").run(&joined);
            prop_assert!(is_success(&result));
            prop_assert_eq!(result.into_value(), Some(values));
        }

        #[test]
        fn test_seq_complete_iff_concatenation(a in literal_strategy(), b in literal_strategy(), input in text_strategy()) {
            let result = seq([a.clone(), b.clone()]).run(&input);
            prop_assert_eq!(is_success(&result), format!("{a}{b}") == input);
        }

        #[test]
        fn test_location_counts_consumed_text(lines in prop::collection::vec("[a-z ]{0,5}", 1..5)) {
            let input = lines.join("\n");
            let env = Env::new();
            let result = many(any()).parse(&input, &env);

            prop_assert!(is_success(&result));
            prop_assert_eq!(env.line(), lines.len());
            prop_assert_eq!(env.col(), lines[lines.len() - 1].chars().count() + 1);
        }

        #[test]
        fn test_shared_env_counts_every_input(inputs in prop::collection::vec(literal_strategy(), 1..5)) {
            let env = Env::new();
            for input in &inputs {
                let result = parse(input.clone()).parse(input, &env);
                prop_assert!(is_success(&result));
            }

            let total: usize = inputs.iter().map(|input| input.chars().count()).sum();
            prop_assert_eq!(env.location(), Location::new(1, total + 1));
        }

        #[test]
        fn test_alternatives_advance_for_each_match(prefix in literal_strategy()) {
            // The first alternative matches `prefix`, then fails on `!`
            let parser = or![seq([prefix.clone(), "!".to_string()]), seq([prefix.clone(), "?".to_string()])];
            let input = format!("{prefix}?");
            let env = Env::new();

            prop_assert!(is_success(&parser.parse(&input, &env)));
            prop_assert_eq!(env.col(), 2 * prefix.chars().count() + 2);
        }
    }
}
