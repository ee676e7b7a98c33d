//! Shared Macros

/// Merge multiple vectors into one.
#[macro_export]
macro_rules! merge {
    ($($vec:expr),+ $(,)?) => {{
        let mut result = Vec::new();
        $(result.extend($vec);)+
        result
    }};
}

/// Run strategies in order against the same input, returning the first `Some`.
///
/// ```
/// fn none(_: &str) -> Option<u32> { None }
/// fn len(s: &str) -> Option<u32> { Some(s.len() as u32) }
///
/// assert_eq!(seoscope::first_some!("abc" => none, len), Some(3));
/// ```
#[macro_export]
macro_rules! first_some {
    ($input:expr => $($strategy:expr),+ $(,)?) => {{
        let input = $input;
        None$(.or_else(|| $strategy(input)))+
    }};
}

/// Deduplicate a collection by a derived key, keeping the first occurrence.
#[macro_export]
macro_rules! dedupe_by {
    ($list:expr, $key:expr) => {{
        let mut seen = std::collections::HashSet::new();
        let mut result = Vec::new();
        for item in $list {
            if seen.insert($key(&item)) {
                result.push(item);
            }
        }
        result
    }};
}
