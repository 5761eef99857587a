pub mod dataset_reader;
