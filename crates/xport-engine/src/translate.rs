use crate::reflect::Shape;
use tracing::debug;
use xport_core::{FieldPath, RuleSet};

/// Rewrites a declared-name path into serialized names by walking `shape`.
///
/// Segments that do not name a field are copied unchanged and the walk stays on the
/// current type. `[]` segments step into the sequence element type and keep their marker.
pub fn translate_path(shape: Shape, path: &FieldPath) -> FieldPath {
    let mut current = shape;
    let mut segments = Vec::with_capacity(path.len());
    for segment in path.segments() {
        let Some(field) = current.field(segment.name()) else {
            segments.push(segment.clone());
            continue;
        };
        segments.push(segment.with_name(field.serialized));
        let field_shape = (field.shape)();
        current = if segment.is_repeated() {
            field_shape.element().unwrap_or(field_shape)
        } else {
            field_shape
        };
    }
    FieldPath::from_segments(segments)
}

pub fn translate_rules(shape: Shape, rules: &RuleSet) -> RuleSet {
    rules.map_paths(|path| {
        let translated = translate_path(shape, path);
        debug!(declared = %path, serialized = %translated, "translated rule path");
        translated
    })
}

#[cfg(test)]
#[path = "translate_test.rs"]
mod tests;
