pub mod hashmap_account_store;

pub use hashmap_account_store::HashMapAccountStore;
