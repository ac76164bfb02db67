mod compress_tests;
