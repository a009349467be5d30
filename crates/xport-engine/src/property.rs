/// Element of a dynamic property list (identity provider or notification sender settings).
///
/// Under a `DynamicPropertyFields` rule each element is exported as `name`, a placeholder
/// `value` and `is_secret: true` when the property is sensitive. The concrete value is
/// never read.
pub trait Property {
    fn display_name(&self) -> &str;

    fn is_secret(&self) -> bool;
}
