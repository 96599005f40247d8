/// Defines an enum backed by a numeric wire code and generates:
/// - derives (Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)
/// - `code()`, `label()` and `ALL`
/// - `TryFrom<u8>`, `TryFrom<Code>` and `From<$name> for u8`
/// - `Display` (the label)
///
/// Usage:
///   coded_enum! { SpotType { Indoor = 1 => "Indoor", Outdoor = 2 => "Outdoor" } }
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $code:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(try_from = "crate::models::Code", into = "u8")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn code(self) -> u8 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl ::std::convert::TryFrom<u8> for $name {
            type Error = crate::models::UnknownCode;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok($name::$variant),)+
                    other => Err(crate::models::UnknownCode {
                        kind: stringify!($name),
                        code: other.to_string(),
                    }),
                }
            }
        }

        impl ::std::convert::TryFrom<crate::models::Code> for $name {
            type Error = crate::models::UnknownCode;

            fn try_from(code: crate::models::Code) -> Result<Self, Self::Error> {
                $name::try_from(code.to_u8(stringify!($name))?)
            }
        }

        impl ::std::convert::From<$name> for u8 {
            fn from(v: $name) -> u8 {
                v.code()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

/// Defines an enum backed by a lowercase string key. Same shape as
/// `coded_enum!` with `key()` in place of `code()` and `FromStr`
/// for parsing command line arguments.
macro_rules! keyed_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $key:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = crate::models::UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($key => Ok($name::$variant),)+
                    other => Err(crate::models::UnknownCode {
                        kind: stringify!($name),
                        code: other.to_string(),
                    }),
                }
            }
        }

        impl ::std::convert::TryFrom<String> for $name {
            type Error = crate::models::UnknownCode;

            fn try_from(key: String) -> Result<Self, Self::Error> {
                key.parse()
            }
        }

        impl ::std::convert::From<$name> for String {
            fn from(v: $name) -> String {
                v.key().to_string()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}
