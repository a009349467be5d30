/// Implements [`Reflect`](crate::Reflect) for a record from its field list, in declaration
/// order:
///
/// ```ignore
/// reflect_record!(OAuthAppConfig {
///     client_id: String => "ClientID" as "client_id",
///     scopes: Vec<String> => "Scopes" as "scopes" [omit_empty],
/// });
/// ```
///
/// `reflect_record!(ConfigProperty: property { .. })` additionally routes
/// `as_property` to the record's [`Property`](crate::Property) impl.
#[macro_export]
macro_rules! reflect_record {
    (@omit omit_empty) => {
        true
    };
    (@omit) => {
        false
    };
    (@impl $record:ident, { $($extra:tt)* },
        $( $field:ident : $ftype:ty => $declared:literal as $serialized:literal $( [$flag:ident] )? ),* $(,)?
    ) => {
        impl $crate::Reflect for $record {
            fn shape() -> $crate::Shape {
                const FIELDS: &[$crate::FieldDef] = &[
                    $(
                        $crate::FieldDef {
                            declared: $declared,
                            serialized: $serialized,
                            omit_empty: $crate::reflect_record!(@omit $($flag)?),
                            shape: <$ftype as $crate::Reflect>::shape,
                        },
                    )*
                ];
                $crate::Shape::Record {
                    name: stringify!($record),
                    fields: FIELDS,
                }
            }

            fn reflect(&self) -> $crate::Reflected<'_> {
                let values: ::std::vec::Vec<&dyn $crate::Reflect> =
                    ::std::vec![$( &self.$field as &dyn $crate::Reflect ),*];
                let fields = <Self as $crate::Reflect>::shape().fields().unwrap_or(&[]);
                $crate::Reflected::Record(
                    fields
                        .iter()
                        .zip(values)
                        .map(|(def, value)| $crate::FieldRef { def, value })
                        .collect(),
                )
            }

            $($extra)*
        }
    };
    ($record:ident : property { $($body:tt)* }) => {
        $crate::reflect_record!(@impl $record, {
            fn as_property(&self) -> ::std::option::Option<&dyn $crate::Property> {
                ::std::option::Option::Some(self)
            }
        }, $($body)*);
    };
    ($record:ident { $($body:tt)* }) => {
        $crate::reflect_record!(@impl $record, {}, $($body)*);
    };
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
