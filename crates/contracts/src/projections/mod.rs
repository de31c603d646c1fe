pub mod p001_hierarchy;
