mod catalog_tests;
mod fixtures;
