mod properties;
mod serde_raw;
