mod delayed_resolver;
pub mod model;
mod named_ref;
pub mod operation;
pub mod schema;
mod type_descriptor;
pub mod types;
mod value;

pub use delayed_resolver::DeferredResolution;
pub use delayed_resolver::DelayedResolver;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use type_descriptor::TypeDescriptor;
pub use value::Value;
