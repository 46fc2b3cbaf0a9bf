//! Macro for implementing wire-name conversions on discriminator enums
//!
//! Wire discriminators are case-sensitive literals, so unlike free-form
//! status strings they are matched exactly.
//!
//! # Example
//!
//! ```rust
//! use segment_config_domain::impl_wire_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Verdict {
//!     Keep,
//!     Drop,
//! }
//!
//! impl_wire_name_conversions!(Verdict {
//!     Keep => "keep",
//!     Drop => "drop",
//! });
//!
//! assert_eq!(Verdict::Drop.as_str(), "drop");
//! assert_eq!(Verdict::from_wire("keep"), Some(Verdict::Keep));
//! assert_eq!(Verdict::from_wire("KEEP"), None);
//! ```

/// Implements `as_str`, `from_wire`, `Display` and `FromStr` for an enum
/// whose variants map one-to-one onto wire literals.
#[macro_export]
macro_rules! impl_wire_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$enum_name] = &[$(Self::$variant,)+];

            /// The literal written on the wire for this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }

            /// Exact, case-sensitive lookup of a wire literal.
            pub fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $($str => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_wire(s)
                    .ok_or_else(|| format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestKind {
        First,
        SecondKind,
    }

    impl_wire_name_conversions!(TestKind {
        First => "first",
        SecondKind => "second_kind",
    });

    #[test]
    fn test_as_str_and_display_agree() {
        for kind in TestKind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
        assert_eq!(TestKind::SecondKind.as_str(), "second_kind");
    }

    #[test]
    fn test_from_wire_is_exact() {
        assert_eq!(TestKind::from_wire("first"), Some(TestKind::First));
        assert_eq!(TestKind::from_wire("First"), None);
        assert_eq!(TestKind::from_wire("second-kind"), None);
    }

    #[test]
    fn test_fromstr_error_names_enum() {
        let err = TestKind::from_str("third").unwrap_err();
        assert!(err.contains("TestKind"));
        assert!(err.contains("third"));
    }
}
