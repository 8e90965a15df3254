//! Macros for declaring state and trigger vocabularies.

/// Declare a unit-variant enum and implement `State` for it.
///
/// The generated enum is `Copy + Eq + Hash`, displays as its variant name,
/// parses back from that exact name, and lists its variants in `ALL`.
///
/// # Example
///
/// ```
/// use orderly::state_enum;
/// use orderly::core::State;
///
/// state_enum! {
///     pub enum TicketState {
///         Open,
///         Resolved,
///         Rejected,
///     }
///     final: [Resolved, Rejected]
///     error: [Rejected]
/// }
///
/// assert_eq!(TicketState::ALL.len(), 3);
/// assert!(TicketState::Rejected.is_error());
/// assert_eq!("Open".parse::<TicketState>().unwrap(), TicketState::Open);
/// assert_eq!(TicketState::Resolved.to_string(), "Resolved");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            $vis const ALL: &[$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            #[allow(unreachable_patterns)]
            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad($crate::core::State::name(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::UnknownVariant;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $(
                    if s == stringify!($variant) {
                        return Ok(Self::$variant);
                    }
                )*
                Err($crate::core::UnknownVariant::new("state", s))
            }
        }
    };
}

/// Declare a unit-variant enum and implement `Trigger` for it.
///
/// # Example
///
/// ```
/// use orderly::trigger_enum;
/// use orderly::core::Trigger;
///
/// trigger_enum! {
///     pub enum TicketTrigger {
///         Resolve,
///         Reject,
///     }
/// }
///
/// assert_eq!(TicketTrigger::Reject.name(), "Reject");
/// assert!("Reopen".parse::<TicketTrigger>().is_err());
/// ```
#[macro_export]
macro_rules! trigger_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            $vis const ALL: &[$name] = &[$($name::$variant),*];
        }

        impl $crate::core::Trigger for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad($crate::core::Trigger::name(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::UnknownVariant;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $(
                    if s == stringify!($variant) {
                        return Ok(Self::$variant);
                    }
                )*
                Err($crate::core::UnknownVariant::new("trigger", s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Draft,
            Shipped,
            Completed,
            Cancelled,
        }
        final: [Completed, Cancelled]
        error: [Cancelled]
    }

    trigger_enum! {
        enum TestTrigger {
            Ship,
            Deliver,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Draft.name(), "Draft");
        assert!(!TestState::Draft.is_final());
        assert!(!TestState::Shipped.is_error());
        assert!(TestState::Completed.is_final());
        assert!(!TestState::Completed.is_error());
        assert!(TestState::Cancelled.is_final());
        assert!(TestState::Cancelled.is_error());
    }

    #[test]
    fn all_lists_variants_in_declaration_order() {
        assert_eq!(
            TestState::ALL,
            &[
                TestState::Draft,
                TestState::Shipped,
                TestState::Completed,
                TestState::Cancelled
            ]
        );
        assert_eq!(TestTrigger::ALL, &[TestTrigger::Ship, TestTrigger::Deliver]);
    }

    #[test]
    fn display_and_from_str_use_variant_name() {
        for state in TestState::ALL {
            let parsed: TestState = state.to_string().parse().unwrap();
            assert_eq!(parsed, *state);
        }
        assert_eq!(TestTrigger::Deliver.to_string(), "Deliver");
        assert_eq!(format!("[{:<9}]", TestState::Draft), "[Draft    ]");
        assert_eq!("Ship".parse::<TestTrigger>().unwrap(), TestTrigger::Ship);
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let err = "shipped".parse::<TestState>().unwrap_err();
        assert_eq!(err.kind, "state");
        assert_eq!(err.name, "shipped");

        let err = "Teleport".parse::<TestTrigger>().unwrap_err();
        assert_eq!(err.kind, "trigger");
    }

    #[test]
    fn state_enum_works_without_final_error() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        assert!(!MinimalState::One.is_final());
        assert!(!MinimalState::Two.is_error());
    }
}
