mod parse_line_tests;
