// Pipelines — end-to-end workflows composed from the library modules.

pub mod mapping;
