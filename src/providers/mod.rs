pub mod dataset_reader;
pub mod embedded;
pub mod favorites_reader;
pub mod favorites_writer;
pub mod fs;
pub mod settings_reader;
