/// Implements [`Entity`](crate::entity::Entity) for a struct by mapping
/// property names onto fields.
///
/// ```ignore
/// impl_entity!(User, "User", {
///     "id" => id,
///     "name" => name,
/// });
/// ```
#[macro_export]
macro_rules! impl_entity {
    ($ty:ty, $name:expr, { $($prop:literal => $field:ident),* $(,)? }) => {
        impl $crate::entity::Entity for $ty {
            fn entity_name(&self) -> &str {
                $name
            }

            fn property(&self, name: &str) -> Option<$crate::core::value::Value> {
                match name {
                    $($prop => $crate::core::property::Property::to_property(&self.$field),)*
                    _ => None,
                }
            }
        }
    };
}
