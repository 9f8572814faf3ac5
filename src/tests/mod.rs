mod parser_document_tests;
mod parser_value_tests;
mod utils;
