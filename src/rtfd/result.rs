/// Crate-wide result, errors are typed enums wrapped by anyhow
pub type Result<T = ()> = anyhow::Result<T>;
