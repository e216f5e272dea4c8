//! Positional placeholder substitution.
//!
//! Terms may contain `{0}`, `{1}`, ... tokens. [`substitute`] replaces the
//! first occurrence of `{i}` with the i-th argument, walking the arguments
//! in order. There is no escaping: a literal `{0}` in a term is always a
//! placeholder.

use std::fmt::Display;

/// Replaces the first occurrence of each `{i}` with `args[i]`.
///
/// Replacement happens one argument at a time, so text introduced by an
/// earlier argument is visible to later ones. Surplus arguments are ignored
/// and tokens without an argument are left untouched.
///
/// # Examples
///
/// ```
/// use lexicon_rs_resolver::placeholder::substitute;
///
/// assert_eq!(substitute("Hi {0}, meet {1}", &[&"Ann", &"Bob"]), "Hi Ann, meet Bob");
/// assert_eq!(substitute("{0} items", &[&3, &"surplus"]), "3 items");
/// ```
pub fn substitute(template: &str, args: &[&dyn Display]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |text, (index, arg)| {
            text.replacen(&format!("{{{index}}}"), &arg.to_string(), 1)
        })
}
