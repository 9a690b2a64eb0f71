mod utils_test;
