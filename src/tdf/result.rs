/// Convenience type to make error mapping cleaner. Errors raised by the crate (query, repository,
/// money) are `thiserror` enums carried inside the `anyhow::Error`, so callers can downcast them.
pub type Result<T = ()> = anyhow::Result<T>;
