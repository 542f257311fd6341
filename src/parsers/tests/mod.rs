mod image_tests;
