pub mod cortex_xdr;
pub mod insight_platform;
pub mod insight_vm;
