mod filter_tests;
mod natural_tests;
