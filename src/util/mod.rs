/// Minimum stack space to keep available before recursing further.
const RED_ZONE: usize = 100 * 1024;

/// Stack space allocated each time the stack has to grow.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, growing the stack first if less than [`RED_ZONE`] bytes remain.
///
/// The parser and evaluator recurse once per nesting level of the source, so
/// every recursive step goes through here.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
pub fn is_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[inline]
pub fn is_numeric(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_skippable(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}
