//! Enumeration codec
//!
//! `lsp_enum!` declares an LSP enumeration with its exact wire values. The
//! first token after the name selects the wire type (`integer` or `string`);
//! a trailing `custom` opts into the `Custom(..)` fallback variant for the
//! enumerations whose schema allows values outside the predefined set.

/// Builds the membership error for a value outside a closed enumeration
pub(crate) fn unknown_value<E>(type_name: &'static str, value: impl std::fmt::Debug) -> E
where
    E: serde::de::Error,
{
    crate::codec::error::raise(crate::codec::error::DecodeError::UnknownEnumValue {
        type_name,
        value: format!("{value:?}"),
    })
}

macro_rules! lsp_enum {
    // Closed integer enumeration
    (
        $(#[$meta:meta])*
        pub enum $name:ident: integer {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Wire value of the member
            pub const fn value(self) -> i32 {
                match self {
                    $( $name::$variant => $value, )+
                }
            }

            /// Member for a wire value, `None` outside the enumeration
            pub fn from_value(value: i32) -> Option<Self> {
                match value {
                    $( $value => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_i32(self.value())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <i64 as ::serde::Deserialize>::deserialize(deserializer)?;
                i32::try_from(raw)
                    .ok()
                    .and_then($name::from_value)
                    .ok_or_else(|| $crate::codec::enumeration::unknown_value(stringify!($name), raw))
            }
        }
    };

    // Integer enumeration that also accepts values outside the predefined set
    (
        $(#[$meta:meta])*
        pub enum $name:ident: integer, custom {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value outside the predefined set
            Custom(i32),
        }

        impl $name {
            /// Every predefined member, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Wire value of the member
            pub const fn value(self) -> i32 {
                match self {
                    $( $name::$variant => $value, )+
                    $name::Custom(value) => value,
                }
            }

            /// Member for a wire value; unknown values become `Custom`
            pub fn from_value(value: i32) -> Self {
                match value {
                    $( $value => $name::$variant, )+
                    other => $name::Custom(other),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_i32(self.value())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <i64 as ::serde::Deserialize>::deserialize(deserializer)?;
                i32::try_from(raw)
                    .map($name::from_value)
                    .map_err(|_| $crate::codec::enumeration::unknown_value(stringify!($name), raw))
            }
        }
    };

    // Closed string enumeration
    (
        $(#[$meta:meta])*
        pub enum $name:ident: string {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Wire value of the member
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value, )+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::codec::DecodeError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $( $value => Ok($name::$variant), )+
                    _ => Err($crate::codec::DecodeError::UnknownEnumValue {
                        type_name: stringify!($name),
                        value: format!("{s:?}"),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err($crate::codec::error::raise::<D::Error>)
            }
        }
    };

    // String enumeration that also accepts values outside the predefined set
    (
        $(#[$meta:meta])*
        pub enum $name:ident: string, custom {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value outside the predefined set
            Custom(::std::string::String),
        }

        impl $name {
            /// Every predefined member, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Wire value of the member
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $value, )+
                    $name::Custom(value) => value,
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(match s {
                    $( $value => $name::$variant, )+
                    other => $name::Custom(other.to_string()),
                })
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value.parse() {
                    Ok(kind) => kind,
                    Err(never) => match never {},
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from(raw.as_str()))
            }
        }
    };
}

pub(crate) use lsp_enum;

#[cfg(test)]
mod tests {
    use serde_json::json;

    lsp_enum! {
        pub enum Level: integer {
            Low = 1,
            High = 2,
        }
    }

    lsp_enum! {
        pub enum Code: integer, custom {
            Parse = -32700,
            Internal = -32603,
        }
    }

    lsp_enum! {
        pub enum Flavor: string {
            Plain = "plaintext",
            Markdown = "markdown",
        }
    }

    lsp_enum! {
        pub enum Tag: string, custom {
            Empty = "",
            Fix = "quickfix",
        }
    }

    #[test]
    fn closed_integer_enum_round_trips_every_member() {
        for member in Level::ALL {
            let value = serde_json::to_value(member).unwrap();
            assert_eq!(value, json!(member.value()));
            assert_eq!(serde_json::from_value::<Level>(value).unwrap(), *member);
        }
    }

    #[test]
    fn closed_integer_enum_rejects_unknown_value() {
        let err = serde_json::from_value::<Level>(json!(3)).unwrap_err();
        assert_eq!(err.to_string(), "3 is not a value of Level");
    }

    #[test]
    fn closed_integer_enum_rejects_out_of_range_value() {
        assert!(serde_json::from_value::<Level>(json!(1_i64 << 40)).is_err());
    }

    #[test]
    fn closed_integer_enum_rejects_string() {
        assert!(serde_json::from_value::<Level>(json!("1")).is_err());
    }

    #[test]
    fn custom_integer_enum_keeps_unknown_values() {
        assert_eq!(serde_json::from_value::<Code>(json!(-32700)).unwrap(), Code::Parse);
        assert_eq!(serde_json::from_value::<Code>(json!(-1)).unwrap(), Code::Custom(-1));
        assert_eq!(serde_json::to_value(Code::Custom(-1)).unwrap(), json!(-1));
    }

    #[test]
    fn closed_string_enum_rejects_unknown_value() {
        assert_eq!(serde_json::from_value::<Flavor>(json!("markdown")).unwrap(), Flavor::Markdown);

        let err = serde_json::from_value::<Flavor>(json!("html")).unwrap_err();
        assert_eq!(err.to_string(), "\"html\" is not a value of Flavor");
    }

    #[test]
    fn custom_string_enum_prefers_predefined_member() {
        assert_eq!(serde_json::from_value::<Tag>(json!("")).unwrap(), Tag::Empty);
        assert_eq!(serde_json::from_value::<Tag>(json!("quickfix")).unwrap(), Tag::Fix);
        assert_eq!(
            serde_json::from_value::<Tag>(json!("refactor.move")).unwrap(),
            Tag::Custom("refactor.move".to_string())
        );
        assert_eq!(Tag::from("refactor.move").as_str(), "refactor.move");
    }
}
