mod cli_test;
mod properties;
mod search_test;
