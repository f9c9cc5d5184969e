//! Declarative helpers for the closed catalog enumerations

/// Declares a closed enumeration whose variants have a canonical uppercase
/// name. Generates `ALL`, `name()`, case-insensitive `FromStr`, `Display`,
/// string-based serde and a [`Resolve`](crate::types::Resolve) impl for the
/// enum itself and for string inputs.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $err:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Canonical uppercase name
            pub const fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::MapleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| $crate::error::MapleError::$err(s.to_string()))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(::serde::de::Error::custom)
            }
        }

        impl $crate::types::Resolve<$name> for $name {
            fn resolve(self) -> Result<$name, $crate::error::MapleError> {
                Ok(self)
            }
        }

        impl $crate::types::Resolve<$name> for &str {
            fn resolve(self) -> Result<$name, $crate::error::MapleError> {
                self.parse()
            }
        }

        impl $crate::types::Resolve<$name> for String {
            fn resolve(self) -> Result<$name, $crate::error::MapleError> {
                self.parse()
            }
        }
    };
}
