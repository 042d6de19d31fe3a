pub mod p900_unified_dataset;
