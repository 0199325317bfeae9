use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug + Send + Sync + 'static
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки (например, из пути запроса)
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Проверка slug-идентификатора контента (`job-001`, `store-riyadh-park`)
pub fn validate_slug(s: &str) -> Result<(), String> {
    if s.is_empty() {
        return Err("Empty id".to_string());
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(format!("Invalid id: {}", s));
    }
    Ok(())
}

/// Newtype над slug-строкой с реализацией `AggregateId`
macro_rules! slug_id {
    ($(#[$meta:meta])* pub struct $name:ident;) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.clone()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                $crate::domain::common::validate_slug(s)?;
                Ok(Self::new(s))
            }
        }
    };
}

pub(crate) use slug_id;

#[cfg(test)]
mod tests {
    use super::*;

    slug_id! {
        /// Test id
        pub struct SampleId;
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("job-001").is_ok());
        assert!(validate_slug("store-riyadh-park").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Job 1").is_err());
    }

    #[test]
    fn test_slug_id_parses_and_serializes_transparently() {
        let id = SampleId::from_string("office-hq").unwrap();
        assert_eq!(id.value(), "office-hq");
        assert_eq!(id.as_string(), "office-hq");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"office-hq\"");
        assert!(SampleId::from_string("../etc").is_err());
    }
}
