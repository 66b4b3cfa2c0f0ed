pub mod local;

pub use local::LocalImageStorage;
