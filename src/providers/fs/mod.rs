pub mod dataset_reader;
pub mod favorites_reader;
pub mod favorites_writer;
pub mod path;
pub mod settings_reader;
