mod schema_parser_tests;
