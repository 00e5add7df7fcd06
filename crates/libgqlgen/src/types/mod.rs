mod builtin_scalar;
mod list_type_annotation;
mod named_type_annotation;
mod type_annotation;

pub use builtin_scalar::BuiltinScalar;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub use type_annotation::TypeAnnotation;

#[cfg(test)]
mod tests;
