//! Macros for ergonomic identifier declaration.

/// Generate a unit-variant enum implementing [`State`](crate::core::State).
///
/// # Example
///
/// ```
/// use flipstate::core::State;
/// use flipstate::state_enum;
///
/// state_enum! {
///     pub enum Switch {
///         Off,
///         On,
///     }
/// }
///
/// assert_eq!(Switch::On.name(), "On");
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
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate a unit-variant enum implementing [`Event`](crate::core::Event).
///
/// # Example
///
/// ```
/// use flipstate::core::Event;
/// use flipstate::event_enum;
///
/// event_enum! {
///     pub enum SwitchEvent {
///         Toggle,
///     }
/// }
///
/// assert_eq!(SwitchEvent::Toggle.name(), "Toggle");
/// ```
#[macro_export]
macro_rules! event_enum {
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

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
