mod fragment_store_builder_tests;
