mod memory_store;
mod verifier;
