mod read_resource;

pub use read_resource::read_resource_document;
