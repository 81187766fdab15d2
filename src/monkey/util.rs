//! Miscellaneous utility functionality.
//!
//! Nothing in here is Monkey-specific, it only keeps the language
//! modules free of boilerplate.
use macro_pub::macro_pub;

/// Creates a [`HashMap`](std::collections::HashMap) from the given key-value expressions.
///
/// The map type has to be in scope at the call site.
#[macro_pub]
macro_rules! map {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = HashMap::new();
        $(map.insert($key, $value);)*
        map
    }}
}
