//! Macros for declaring transition tables inline.

/// Build a [`Table`](crate::core::Table) from nested identifier pairs.
///
/// Works for either shape: write `state => { event => next }` for a
/// state-keyed table, or `event => { state => next }` for an event-keyed one.
///
/// # Example
///
/// ```
/// use statem::transitions;
///
/// let states = transitions! {
///     Red => { tick => Green },
///     Green => { tick => Yellow },
///     Yellow => { tick => Red },
/// };
///
/// assert_eq!(states["Red"]["tick"], "Green");
/// ```
#[macro_export]
macro_rules! transitions {
    (
        $(
            $outer:ident => {
                $( $inner:ident => $value:ident ),* $(,)?
            }
        ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut table: $crate::core::Table = ::std::collections::BTreeMap::new();
        $(
            #[allow(unused_mut)]
            let mut inner: ::std::collections::BTreeMap<String, String> =
                ::std::collections::BTreeMap::new();
            $(
                inner.insert(stringify!($inner).to_string(), stringify!($value).to_string());
            )*
            table.insert(stringify!($outer).to_string(), inner);
        )*
        table
    }};
}
