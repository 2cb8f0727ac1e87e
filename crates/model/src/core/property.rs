use crate::core::value::Value;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Reads a struct field as an entity property.
///
/// `None` means the property is undefined on the instance, which is
/// distinct from a defined `Value::Null`.
pub trait Property {
    fn to_property(&self) -> Option<Value>;
}

macro_rules! impl_property {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Property for $ty {
                fn to_property(&self) -> Option<Value> {
                    Some(Value::from(self.clone()))
                }
            }
        )*
    };
}

impl_property!(
    i64,
    i32,
    i16,
    u64,
    u32,
    f64,
    f32,
    bool,
    String,
    Uuid,
    NaiveDate,
    DateTime<Utc>,
    serde_json::Value,
);

impl Property for &str {
    fn to_property(&self) -> Option<Value> {
        Some(Value::from(*self))
    }
}

impl Property for Value {
    fn to_property(&self) -> Option<Value> {
        Some(self.clone())
    }
}

impl<T: Property> Property for Option<T> {
    fn to_property(&self) -> Option<Value> {
        self.as_ref().and_then(Property::to_property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_none_is_undefined() {
        let missing: Option<i64> = None;
        assert_eq!(missing.to_property(), None);
        assert_eq!(Some(3i64).to_property(), Some(Value::Int(3)));
    }

    #[test]
    fn test_explicit_null_is_defined() {
        assert_eq!(Value::Null.to_property(), Some(Value::Null));
        assert_eq!(Some(Value::Null).to_property(), Some(Value::Null));
    }
}
