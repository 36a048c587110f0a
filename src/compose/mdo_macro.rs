//! `mdo!` macro for do-notation over an explicit monad instance.
//!
//! # Syntax
//!
//! ```text
//! mdo!(instance;
//!     name <= computation;     // bind the computation's value to `name`
//!     _ <= computation;        // run the computation, ignore its value
//!     let name = expression;   // plain binding
//!     yield expression         // finish with `pure(expression)`
//! )
//! ```
//!
//! The block may also end with a computation instead of `yield`.
//!
//! # Expansion
//!
//! `name <= computation; rest` becomes
//! `Bind::bind(&instance, computation, move |name| rest)`, and
//! `yield expression` becomes `Applicative::pure(&instance, expression)`.
//! The instance is cloned once at the start and every continuation owns its
//! own copy.
//!
//! Every name bound so far is cloned at the start of each continuation and
//! before each computation. Continuations therefore stay `Fn` and can be run
//! any number of times, which multi-valued monads such as `List` require.
//! Bound values must be `Clone`.

/// Do-notation over an explicitly supplied monad instance.
///
/// # Examples
///
/// ```rust
/// use kindred::mdo;
/// use kindred::data::{Maybe, MaybeMonad};
///
/// let joined = mdo!(MaybeMonad;
///     a <= Maybe::present("one".to_string());
///     b <= Maybe::present("two".to_string());
///     yield a + &b
/// );
/// assert_eq!(joined, Maybe::present("onetwo".to_string()));
/// ```
#[macro_export]
macro_rules! mdo {
    // =========================================================================
    // Terminal cases
    // =========================================================================

    (@step $instance:ident [$($bound:ident)*] yield $result:expr) => {
        $crate::typeclass::Applicative::pure(&$instance, $result)
    };

    // =========================================================================
    // Binds
    // =========================================================================

    (@step $instance:ident [$($bound:ident)*] _ <= $computation:expr ; $($rest:tt)+) => {
        $crate::typeclass::Bind::bind(
            &$instance,
            {
                $( #[allow(unused_variables)] let $bound = ::core::clone::Clone::clone(&$bound); )*
                $computation
            },
            {
                let $instance = ::core::clone::Clone::clone(&$instance);
                move |_| {
                    $( #[allow(unused_variables)] let $bound = ::core::clone::Clone::clone(&$bound); )*
                    $crate::mdo!(@step $instance [$($bound)*] $($rest)+)
                }
            },
        )
    };

    (@step $instance:ident [$($bound:ident)*] let $name:ident = $value:expr ; $($rest:tt)+) => {{
        let $name = {
            $( #[allow(unused_variables)] let $bound = ::core::clone::Clone::clone(&$bound); )*
            $value
        };
        $crate::mdo!(@step $instance [$($bound)* $name] $($rest)+)
    }};

    (@step $instance:ident [$($bound:ident)*] $name:ident <= $computation:expr ; $($rest:tt)+) => {
        $crate::typeclass::Bind::bind(
            &$instance,
            {
                $( #[allow(unused_variables)] let $bound = ::core::clone::Clone::clone(&$bound); )*
                $computation
            },
            {
                let $instance = ::core::clone::Clone::clone(&$instance);
                move |$name| {
                    $( #[allow(unused_variables)] let $bound = ::core::clone::Clone::clone(&$bound); )*
                    $crate::mdo!(@step $instance [$($bound)* $name] $($rest)+)
                }
            },
        )
    };

    (@step $instance:ident [$($bound:ident)*] $result:expr) => {
        $result
    };

    // =========================================================================
    // Entry point
    // =========================================================================

    ($monad:expr ; $($rest:tt)+) => {{
        let mdo_instance = ::core::clone::Clone::clone(&$monad);
        $crate::mdo!(@step mdo_instance [] $($rest)+)
    }};
}
