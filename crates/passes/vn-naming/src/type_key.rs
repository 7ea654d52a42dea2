//! Type string normalization
//!
//! Type strings arrive in source form (`java.util.List<String>`, `int[][]`,
//! `Object...`). Before a naming family is looked up they are reduced to a
//! simple key. The helpers here are pure; there is no shared mutable state.

/// Type string the receiver of an instance method is reported with
pub const THIS_TYPE: &str = "this";

const GENERIC_OPEN: char = '<';
const QUALIFIER: char = '.';
const ARRAY_OPEN: char = '[';
const ARRAY: &str = "[]";
const NESTED_ARRAY: &str = "[][]";
const VARARGS: &str = "...";

/// Strips generic arguments and package or outer-class qualifiers
///
/// `java.util.List<String>` becomes `List`, `Map.Entry` becomes `Entry`.
/// Only the text after the last `.` survives, so a varargs type such as
/// `java.lang.Object...` reduces to an empty string.
pub fn normalize(ty: &str) -> &str {
    let ty = ty.find(GENERIC_OPEN).map_or(ty, |idx| &ty[..idx]);
    ty.rfind(QUALIFIER).map_or(ty, |idx| &ty[idx + 1..])
}

/// Collapses repeated array markers, `T[][][]` to `T[]`
pub fn collapse_arrays(ty: &str) -> String {
    let mut collapsed = ty.to_owned();
    while collapsed.contains(NESTED_ARRAY) {
        collapsed = collapsed.replace(NESTED_ARRAY, ARRAY);
    }
    collapsed
}

/// Whether the type name starts with an uppercase ASCII letter
pub fn starts_uppercase(ty: &str) -> bool {
    ty.chars().next().is_some_and(|first| first.is_ascii_uppercase())
}

/// Whether the type carries an array or varargs marker
pub fn has_array_marker(ty: &str) -> bool {
    ty.contains(ARRAY_OPEN) || ty.contains(VARARGS)
}

/// Derives the key and base name of a family created on first sight of `ty`
///
/// Varargs are treated as arrays. Array families get an `a` prefix and lose
/// their brackets, so `String[][]` and `String...` both yield
/// `("string[]", "astring")`.
pub fn dynamic_seed(ty: &str) -> (String, String) {
    let collapsed = collapse_arrays(&ty.replace(VARARGS, ARRAY));
    let key = collapsed.to_lowercase();
    // nested class references can leave single dots behind
    let mut base = key.replace(QUALIFIER, "");
    if collapsed.contains(ARRAY_OPEN) {
        base = format!("a{base}").replace(ARRAY, "");
    }
    (key, base)
}
