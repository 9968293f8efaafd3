/// Filesystem adapters for reading the project manifest
mod manifest_reader;

pub use manifest_reader::FileSystemManifestReader;
