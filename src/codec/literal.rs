//! Marker types for string-literal fields such as `kind: "create"`

macro_rules! lsp_literal {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $value:literal;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl $name {
            pub const VALUE: &'static str = $value;
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($value)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                if raw == $value {
                    Ok($name)
                } else {
                    Err($crate::codec::error::raise(
                        $crate::codec::DecodeError::LiteralMismatch {
                            expected: format!("{:?}", $value),
                            found: format!("{raw:?}"),
                        },
                    ))
                }
            }
        }
    };
}

pub(crate) use lsp_literal;

#[cfg(test)]
mod tests {
    use serde_json::json;

    lsp_literal! {
        pub struct Create = "create";
    }

    #[test]
    fn literal_encodes_its_value() {
        assert_eq!(serde_json::to_value(Create).unwrap(), json!("create"));
        assert_eq!(Create::VALUE, "create");
    }

    #[test]
    fn literal_rejects_other_strings() {
        assert_eq!(serde_json::from_value::<Create>(json!("create")).unwrap(), Create);

        let err = serde_json::from_value::<Create>(json!("rename")).unwrap_err();
        assert_eq!(err.to_string(), "Expected \"create\", found \"rename\"");
    }

    #[test]
    fn literal_rejects_non_strings() {
        assert!(serde_json::from_value::<Create>(json!(1)).is_err());
    }
}
