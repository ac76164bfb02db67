mod color_tests;
