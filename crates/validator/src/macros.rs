//! Macros for creating predicates with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: creates a unit predicate struct, its `Validate` impl and a factory fn
//!
//! # Examples
//!
//! ```rust,ignore
//! use serde_json::Value;
//! use vigil_validator::validator;
//! use vigil_validator::foundation::{ValidationError, kind_of};
//!
//! validator! {
//!     pub IsNull for Value;
//!     rule(input) { input.is_null() }
//!     error(input) { ValidationError::type_mismatch("null", kind_of(input)) }
//!     fn is_null();
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a unit predicate: struct definition, `Validate` implementation,
/// and an optional `const` factory function.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]` is always applied.
///
/// ```rust,ignore
/// validator! {
///     /// Accepts JSON booleans.
///     pub IsBoolean for Value;
///     rule(input) { input.is_boolean() }
///     error(input) { ValidationError::type_mismatch("boolean", kind_of(input)) }
///     fn boolean();
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit predicate + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit predicate, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}
